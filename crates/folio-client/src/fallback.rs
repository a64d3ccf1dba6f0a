//! Live-or-default values for content that may fail to load.

/// Values that can be present yet carry nothing worth showing.
pub trait Vacancy {
    fn is_vacant(&self) -> bool;
}

impl<T> Vacancy for Vec<T> {
    fn is_vacant(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Vacancy for Option<T> {
    fn is_vacant(&self) -> bool {
        self.is_none()
    }
}

/// A piece of client state with built-in placeholder content.
///
/// The live value is replaced only by a successful fetch; a failed fetch
/// leaves whatever was there before. [`Resource::resolve`] picks the live
/// value when it has content and the default otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource<T> {
    live: Option<T>,
    default: T,
}

impl<T: Vacancy> Resource<T> {
    pub fn new(default: T) -> Self {
        Self {
            live: None,
            default,
        }
    }

    /// Record the outcome of a fetch. Returns `true` if it replaced the live
    /// value.
    pub fn apply<E>(&mut self, outcome: Result<T, E>) -> bool {
        match outcome {
            Ok(value) => {
                self.live = Some(value);
                true
            }
            Err(_) => false,
        }
    }

    pub fn resolve(&self) -> &T {
        match &self.live {
            Some(value) if !value.is_vacant() => value,
            _ => &self.default,
        }
    }

    /// Whether [`Resource::resolve`] is currently showing live content.
    pub fn is_live(&self) -> bool {
        self.live.as_ref().is_some_and(|v| !v.is_vacant())
    }
}
