use thiserror::Error;

/// Ошибки загрузки всего набора данных: пользователь видит уведомление,
/// коллекция считается пустой.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Сеть / HTTP / чтение файла
    #[error("failed to fetch companies data: {0}")]
    Fetch(String),
    /// Невалидный JSON или нет ключа `companies`
    #[error("invalid data format: {0}")]
    Parse(String),
}

/// Per-entry normalization failure. Always recovered locally: the entry is
/// dropped and the batch continues.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompanyShapeError {
    #[error("missing or malformed `{0}`")]
    Missing(&'static str),
    #[error("location entry #{0} is not a single-key object")]
    BadLocationEntry(usize),
    #[error("unparsable location list {literal:?}: {reason}")]
    BadListLiteral { literal: String, reason: String },
}

/// A UI element the viewer needs at startup is absent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("required element `{0}` not found")]
pub struct DomMissingError(pub &'static str);

/// Writing companies back in the input shape would lose one of them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("two companies share the name {0:?}")]
    DuplicateName(String),
}
