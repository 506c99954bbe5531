// Tab Items
// Opaque tab descriptors compared by identity, not by value

use std::fmt;
use std::rc::Rc;

#[derive(Debug)]
struct TabItemData {
    title: String,
    icon: Option<String>,
}

/// One destination in the tab bar
///
/// Cloning a `TabItem` yields another handle to the same item. Two items
/// built from identical titles are still different items.
#[derive(Clone)]
pub struct TabItem(Rc<TabItemData>);

impl TabItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self(Rc::new(TabItemData {
            title: title.into(),
            icon: None,
        }))
    }

    pub fn with_icon(title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self(Rc::new(TabItemData {
            title: title.into(),
            icon: Some(icon.into()),
        }))
    }

    pub fn title(&self) -> &str {
        &self.0.title
    }

    pub fn icon(&self) -> Option<&str> {
        self.0.icon.as_deref()
    }

    /// Label shown on the button: icon followed by title
    pub fn label(&self) -> String {
        match self.icon() {
            Some(icon) => format!("{} {}", icon, self.title()),
            None => self.title().to_string(),
        }
    }

    /// Identity comparison
    pub fn is(&self, other: &TabItem) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for TabItem {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl Eq for TabItem {}

impl fmt::Debug for TabItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabItem")
            .field("title", &self.0.title)
            .field("icon", &self.0.icon)
            .field("ptr", &Rc::as_ptr(&self.0))
            .finish()
    }
}
