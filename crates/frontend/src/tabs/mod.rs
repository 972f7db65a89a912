//! Tab widgets module
//!
//! Содержит:
//! - `context` - контекст контейнера (`TabsContext`): текущий выбор и реестр списков
//! - `tabs` - компонент-контейнер `Tabs`
//! - `tablist` - компонент `TabList` и контекст списка (регистрация, клавиатура, фокус)
//! - `tab` - компонент `Tab`
//! - `panel` - компонент `TabPanel`
//! - `keys` - маппинг клавиш стрелок на направление навигации

pub mod context;
pub mod keys;
pub mod panel;
pub mod tab;
pub mod tablist;
pub mod tabs;

pub use context::TabsContext;
pub use panel::TabPanel;
pub use tab::Tab;
pub use tablist::{TabList, TabListContext};
pub use tabs::Tabs;
