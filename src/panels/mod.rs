mod central_panel;
mod sticker_prompt;
mod tools_panel;

pub use central_panel::central_panel;
pub use sticker_prompt::sticker_prompt;
pub use tools_panel::tools_panel;
