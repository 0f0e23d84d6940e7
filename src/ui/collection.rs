//! Loaded-collection state shared by the list views.

/// A server-backed list plus its loading and error flags.
///
/// Every load starts from scratch: starting a load drops the previous
/// items and error.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
}

/// What a list view should show, in precedence order.
#[derive(Debug, PartialEq)]
pub enum Display<'a, T> {
    Loading,
    Failed(&'a str),
    Empty,
    Items(&'a [T]),
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T> Collection<T> {
    pub fn start_loading(self) -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn loaded(items: Vec<T>) -> Self {
        Self {
            items,
            loading: false,
            error: None,
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: Some(message),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn display(&self) -> Display<'_, T> {
        if self.loading {
            Display::Loading
        } else if let Some(error) = &self.error {
            Display::Failed(error)
        } else if self.items.is_empty() {
            Display::Empty
        } else {
            Display::Items(&self.items)
        }
    }
}
