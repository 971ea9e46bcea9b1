//! Tables created by the embedded migrations.
//!
//! These definitions must match the embedded migrations exactly. The
//! `diesel print-schema` command regenerates them from a live database.

diesel::table! {
    /// Registered accounts.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Unique login name.
        username -> Varchar,
        /// Unique, lower-cased email address.
        email -> Varchar,
        /// Argon2 PHC string, salt included.
        password_hash -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Campground listings.
    campgrounds (id) {
        id -> Uuid,
        title -> Varchar,
        description -> Text,
        /// Nightly price; never negative.
        price -> Float8,
        location -> Varchar,
        /// GeoJSON `Point`, absent when the listing was never geocoded.
        geometry -> Nullable<Jsonb>,
        /// Array of `{ url, filename }` image references.
        images -> Jsonb,
        author_id -> Uuid,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Reviews left on campgrounds; removed with their campground.
    reviews (id) {
        id -> Uuid,
        campground_id -> Uuid,
        author_id -> Uuid,
        body -> Text,
        /// Star rating between 1 and 5.
        rating -> Int2,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(campgrounds -> users (author_id));
diesel::joinable!(reviews -> campgrounds (campground_id));
diesel::joinable!(reviews -> users (author_id));

diesel::allow_tables_to_appear_in_same_query!(campgrounds, reviews, users);
