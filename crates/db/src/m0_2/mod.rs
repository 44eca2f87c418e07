mod hotel_add_search_columns;
mod user_add_pseudo_search;

use sqlx_migrator::vec_box;

pub struct M0_2;

sqlx_migrator::sqlite_migration!(
    M0_2,
    "main",
    "m0_2",
    vec_box![crate::m0_1::M0_1],
    vec_box![
        hotel_add_search_columns::Operation,
        user_add_pseudo_search::Operation
    ]
);
