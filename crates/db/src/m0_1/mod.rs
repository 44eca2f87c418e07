mod booking_create_hotel_idx;
mod booking_create_table;
mod booking_create_user_idx;
mod hotel_create_location_idx;
mod hotel_create_name_idx;
mod hotel_create_table;
mod user_create_email_idx;
mod user_create_table;

use sqlx_migrator::vec_box;

pub struct M0_1;

sqlx_migrator::sqlite_migration!(
    M0_1,
    "main",
    "m0_1",
    vec_box![],
    vec_box![
        user_create_table::Operation,
        user_create_email_idx::Operation,
        hotel_create_table::Operation,
        hotel_create_name_idx::Operation,
        hotel_create_location_idx::Operation,
        booking_create_table::Operation,
        booking_create_user_idx::Operation,
        booking_create_hotel_idx::Operation
    ]
);
