/// Трейт для корня агрегата
///
/// Идентификация записи и метаданные для UI (заголовки страниц, имена файлов выгрузки).
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id;

    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    fn id(&self) -> Self::Id;

    /// Бизнес-код записи (например, "PO-2023-001")
    fn code(&self) -> String;

    /// Описание/название записи
    fn description(&self) -> &str;

    // ============================================================================
    // Метаданные агрегата
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "project")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Полное имя агрегата (например, "a001_project")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
