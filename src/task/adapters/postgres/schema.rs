//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Task name.
        name -> Text,
        /// Owning user identifier.
        user_id -> Int8,
        /// Completion status in canonical text form.
        #[max_length = 50]
        status -> Varchar,
        /// Due date text.
        due_date -> Text,
        /// Number of due date extensions.
        delay_count -> Int4,
    }
}
