use crate::config::SketchConfig;
use crate::document::Document;
use crate::export::PngFileSink;
use crate::input::InputHandler;
use crate::panels;

/// The sketchpad window: toolbar on the left, drawing surface in the middle.
pub struct SketchApp {
    document: Document,
    input: InputHandler,
    config: SketchConfig,
    /// Text of the "add sticker" prompt while it is open
    sticker_prompt: Option<String>,
    /// Last export outcome or rejected input, shown in the toolbar
    message: Option<String>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        Self::with_document(Document::new(&config), config)
    }

    pub fn with_document(document: Document, config: SketchConfig) -> Self {
        Self {
            document,
            input: InputHandler::new(),
            config,
            sticker_prompt: None,
            message: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn sticker_prompt_mut(&mut self) -> &mut Option<String> {
        &mut self.sticker_prompt
    }

    pub fn open_sticker_prompt(&mut self) {
        self.sticker_prompt.get_or_insert_with(String::new);
    }

    /// Add the prompted glyph as a sticker. Keeps the prompt open when the glyph is rejected.
    pub fn submit_sticker_prompt(&mut self) {
        let Some(glyph) = self.sticker_prompt.clone() else {
            return;
        };
        match self.document.add_sticker(&glyph) {
            Ok(_) => {
                self.sticker_prompt = None;
                self.message = None;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Export at the configured scale to the configured file.
    pub fn export(&mut self) {
        let mut sink = PngFileSink::new(&self.config.export_file);
        self.message = Some(match self.document.export(self.config.export_scale, &mut sink) {
            Ok(()) => format!("Saved {}", sink.path().display()),
            Err(err) => format!("Export failed: {err}"),
        });
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::sticker_prompt(self, ctx);
        panels::central_panel(self, ctx);

        // Canvas input lands after the toolbar painted its state; schedule one more frame
        if self.document.take_redraw() {
            ctx.request_repaint();
        }
    }
}
