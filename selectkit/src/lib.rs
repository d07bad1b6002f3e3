pub mod addressing;
pub mod combobox;
pub mod error;
pub mod option;
pub mod select;
pub mod surface;

pub use addressing::{OptionId, option_id};
pub use combobox::{
    AriaAttributes, ComboEvent, Combobox, ComboboxBuilder, ComboboxConfig, EngineState,
    EventResult, Key, OptionView,
};
pub use error::{ConfigError, SelectError};
pub use option::{ComboOption, Selection, display_text};
pub use select::{SelectAria, SelectConfig, SelectEntry, SelectKind, SelectModel};
pub use surface::{
    DisplaySurface, FrameQueue, FrameScheduler, FrameTask, NullScheduler, NullSurface,
    ScrollAlign, ScrollOptions,
};

pub mod prelude {
    pub use crate::combobox::{ComboEvent, Combobox, ComboboxConfig, EventResult, Key};
    pub use crate::option::{ComboOption, Selection};
    pub use crate::select::{SelectConfig, SelectKind, SelectModel};
    pub use crate::surface::{DisplaySurface, FrameQueue, FrameScheduler, ScrollOptions};
}
