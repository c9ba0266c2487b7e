//! # SQLite Specific SQL
//!
//! This module centralizes the schema and reference-data SQL for the
//! SQLite provider. This keeps the provider logic clean and isolates
//! database-specific syntax.

/// Idempotent schema creation, safe to run on every startup.
///
/// `active_status` is TEXT in `Nile_red` but REAL in `Rhodamine_B`; the
/// source dataset models the two assays differently and readers must not
/// assume a common type.
pub const ALL_TABLE_CREATION_SQL: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS Sample (
        sample_id INTEGER PRIMARY KEY,
        latitude TEXT,
        longitude TEXT,
        date_collected DATE,
        date_tested DATE,
        image BLOB DEFAULT NULL
    )",
    "CREATE TABLE IF NOT EXISTS Nile_red (
        test_id INTEGER PRIMARY KEY,
        sample_id INTEGER,
        microplastic_concentration REAL,
        POLYMER_TYPE TEXT,
        active_status TEXT,
        FOREIGN KEY (sample_id) REFERENCES Sample (sample_id)
    )",
    "CREATE TABLE IF NOT EXISTS Rhodamine_B (
        test_id INTEGER PRIMARY KEY,
        sample_id INTEGER,
        concentration REAL,
        active_status REAL,
        FOREIGN KEY (sample_id) REFERENCES Sample (sample_id)
    )",
];

/// Idempotent reference dataset, keyed by primary key.
///
/// `INSERT OR IGNORE` leaves existing rows alone, so an image attached to a
/// Sample in a previous run survives a restart.
pub const REFERENCE_DATA_SQL: [&str; 3] = [
    "INSERT OR IGNORE INTO Sample (sample_id, latitude, longitude, date_collected, date_tested) VALUES
        (1, '19.8375 N', '83.9730 E', '2025-09-01', '2025-09-03'),
        (2, '19.8380 N', '83.9740 E', '2025-09-03', '2025-09-05'),
        (3, '19.8360 N', '83.9725 E', '2025-09-01', '2025-09-04'),
        (4, '19.8355 N', '83.9750 E', '2025-09-05', '2025-09-07'),
        (5, '19.8378 N', '83.9710 E', '2025-09-02', '2025-09-03'),
        (6, '19.8390 N', '83.9735 E', '2025-09-04', '2025-09-06'),
        (7, '19.8345 N', '83.9745 E', '2025-09-03', '2025-09-05'),
        (8, '19.8365 N', '83.9755 E', '2025-09-06', '2025-09-08'),
        (9, '19.8372 N', '83.9720 E', '2025-09-02', '2025-09-04'),
        (10, '19.8358 N', '83.9715 E', '2025-09-01', '2025-09-03')",
    "INSERT OR IGNORE INTO Nile_red (test_id, sample_id, microplastic_concentration, POLYMER_TYPE, active_status) VALUES
        (1, 1, 0.85, 'PE', 'Active'),
        (2, 2, 0.62, 'PP', 'Active'),
        (3, 3, 1.23, 'PET', 'Active'),
        (4, 4, 1.05, 'PS', 'Active'),
        (5, 5, 0.48, 'PVC', 'Active'),
        (6, 6, 0.77, 'PE', 'Active'),
        (7, 7, 1.12, 'PP', 'Active'),
        (8, 8, 0.91, 'PET', 'Active'),
        (9, 9, 0.69, 'PS', 'Active'),
        (10, 10, 1.34, 'PVC', 'Active')",
    "INSERT OR IGNORE INTO Rhodamine_B (test_id, sample_id, concentration, active_status) VALUES
        (1, 1, 0.342, 0.05),
        (2, 2, 0.289, 0.05),
        (3, 3, 0.456, 0.05),
        (4, 4, 0.398, 0.05),
        (5, 5, 0.234, 0.05),
        (6, 6, 0.312, 0.05),
        (7, 7, 0.401, 0.05),
        (8, 8, 0.367, 0.05),
        (9, 9, 0.298, 0.05),
        (10, 10, 0.422, 0.05)",
];
