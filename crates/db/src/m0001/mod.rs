mod document;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "folio",
    "m0001",
    vec_box![],
    vec_box![document::CreateTable, document::CreateIdx1]
);
