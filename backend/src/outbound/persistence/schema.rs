//! Diesel table definitions. Keep in sync with `migrations/`.

diesel::table! {
    /// Administrator accounts.
    admins (id) {
        id -> Uuid,
        name -> Varchar,
        /// Trimmed and lower-cased; unique.
        email -> Varchar,
        /// Argon2 PHC string.
        password_hash -> Varchar,
        created_date -> Date,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    users (id) {
        id -> Uuid,
        name -> Varchar,
        email -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    books (id) {
        id -> Uuid,
        title -> Varchar,
        author -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Book purchases. `price` is free text.
    purchases (id) {
        id -> Uuid,
        book_id -> Nullable<Uuid>,
        user_id -> Nullable<Uuid>,
        price -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Book rentals. Same shape as `purchases`.
    rentals (id) {
        id -> Uuid,
        book_id -> Nullable<Uuid>,
        user_id -> Nullable<Uuid>,
        price -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(purchases -> books (book_id));
diesel::joinable!(purchases -> users (user_id));
diesel::joinable!(rentals -> books (book_id));
diesel::joinable!(rentals -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(admins, books, purchases, rentals, users);
