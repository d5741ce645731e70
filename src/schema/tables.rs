//! Table definitions for the tours database schema

use super::types::*;

// =============================================================================
// Entity Tables
// =============================================================================

pub static CATEGORIES: TableSchema = TableSchema {
    name: "categories",
    columns: &[
        Column::required("name", ColumnType::Text),
        Column::new("description", ColumnType::Text),
    ],
    foreign_keys: &[],
    surrogate_id: true,
    value_separator: ", ",
};

pub static TOURS: TableSchema = TableSchema {
    name: "tours",
    columns: &[
        Column::required("name", ColumnType::Text),
        Column::new("description", ColumnType::Text),
    ],
    foreign_keys: &[],
    surrogate_id: true,
    value_separator: ", ",
};

pub static LANDMARKS: TableSchema = TableSchema {
    name: "landmarks",
    columns: &[
        Column::required("name", ColumnType::Text),
        Column::new("description", ColumnType::Text),
        Column::required("lat", ColumnType::Real),
        Column::required("long", ColumnType::Real),
    ],
    foreign_keys: &[],
    surrogate_id: true,
    value_separator: ", ",
};

pub static PHOTOS: TableSchema = TableSchema {
    name: "photos",
    columns: &[Column::required("url", ColumnType::Text)],
    foreign_keys: &[],
    surrogate_id: true,
    value_separator: ", ",
};

// =============================================================================
// Child and Join Tables
// =============================================================================

/// Waypoints hang directly off a tour; (tour_id, ordering) identifies them.
pub static WAYPOINTS: TableSchema = TableSchema {
    name: "waypoints",
    columns: &[
        Column::required("lat", ColumnType::Real),
        Column::required("long", ColumnType::Real),
        Column::required("tour_id", ColumnType::Integer),
        Column::required("ordering", ColumnType::Integer),
    ],
    foreign_keys: &[ForeignKey::new("tour_id", "tours")],
    surrogate_id: false,
    value_separator: ", ",
};

pub static TOUR_CATEGORIES: TableSchema = TableSchema {
    name: "tour_categories",
    columns: &[
        Column::required("tour_id", ColumnType::Integer),
        Column::required("category_id", ColumnType::Integer),
    ],
    foreign_keys: &[
        ForeignKey::new("tour_id", "tours"),
        ForeignKey::new("category_id", "categories"),
    ],
    surrogate_id: false,
    value_separator: ", ",
};

/// Downstream loaders expect this table's values without spaces.
pub static TOUR_LANDMARKS: TableSchema = TableSchema {
    name: "tour_landmarks",
    columns: &[
        Column::required("tour_id", ColumnType::Integer),
        Column::required("landmark_id", ColumnType::Integer),
        Column::required("ordering", ColumnType::Integer),
    ],
    foreign_keys: &[
        ForeignKey::new("tour_id", "tours"),
        ForeignKey::new("landmark_id", "landmarks"),
    ],
    surrogate_id: false,
    value_separator: ",",
};

pub static LANDMARK_PHOTOS: TableSchema = TableSchema {
    name: "landmark_photos",
    columns: &[
        Column::required("landmark_id", ColumnType::Integer),
        Column::required("photo_id", ColumnType::Integer),
    ],
    foreign_keys: &[
        ForeignKey::new("landmark_id", "landmarks"),
        ForeignKey::new("photo_id", "photos"),
    ],
    surrogate_id: false,
    value_separator: ", ",
};

/// All tables in dependency order (parents before children)
pub static ALL_TABLES: &[&TableSchema] = &[
    &CATEGORIES,
    &TOURS,
    &LANDMARKS,
    &PHOTOS,
    &WAYPOINTS,
    &TOUR_CATEGORIES,
    &TOUR_LANDMARKS,
    &LANDMARK_PHOTOS,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parents_come_before_children() {
        for (pos, table) in ALL_TABLES.iter().enumerate() {
            for dep in table.foreign_keys.iter().map(|fk| fk.references_table) {
                let dep_pos = ALL_TABLES
                    .iter()
                    .position(|t| t.name == dep)
                    .unwrap_or_else(|| panic!("{} references unknown table {}", table.name, dep));
                assert!(
                    dep_pos < pos,
                    "{} must be listed after its parent {}",
                    table.name,
                    dep
                );
            }
        }
    }

    #[test]
    fn test_table_names_are_unique() {
        let mut names: Vec<_> = ALL_TABLES.iter().map(|t| t.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 8);
    }
}
