use logsynth_core::event::Level;

/// Tag for one thematic event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    LoginSuccess,
    LoginFailure,
    ApiRequest,
    ApiThrottled,
    DbConnectionError,
    DbSlowQuery,
    ResourcePressure,
    SecurityAlert,
}

/// One registry entry: a category tag with its fixed severity.
///
/// The registry is an ordered table selected by index; message synthesis
/// for each tag lives in [`crate::templates`].
#[derive(Debug, Clone, Copy)]
pub struct CategoryTemplate {
    pub category: Category,
    pub level: Level,
}

/// The fixed catalog, defined once and never modified at runtime.
pub const CATALOG: &[CategoryTemplate] = &[
    CategoryTemplate { category: Category::LoginSuccess, level: Level::Info },
    CategoryTemplate { category: Category::LoginFailure, level: Level::Error },
    CategoryTemplate { category: Category::ApiRequest, level: Level::Info },
    CategoryTemplate { category: Category::ApiThrottled, level: Level::Warn },
    CategoryTemplate { category: Category::DbConnectionError, level: Level::Error },
    CategoryTemplate { category: Category::DbSlowQuery, level: Level::Warn },
    CategoryTemplate { category: Category::ResourcePressure, level: Level::Warn },
    CategoryTemplate { category: Category::SecurityAlert, level: Level::Error },
];
