use egui::{Pos2, Vec2};
use image::RgbaImage;

use crate::command::{DrawCommand, History, Preview, PreviewGenerator};
use crate::config::SketchConfig;
use crate::error::{ExportResult, ToolError};
use crate::export::{ExportRenderer, ExportSink};
use crate::input::{InputEvent, Shortcut};
use crate::renderer::{RedrawFlag, RenderPipeline};
use crate::state::PointerState;
use crate::surface::Surface;
use crate::tools::{StickerPalette, ToolSelection, ToolState};

/// The drawing session: history, tool, pointer state and preview behind one set of methods.
///
/// Every operation that can change what is visible marks the redraw flag.
#[derive(Debug)]
pub struct Document {
    history: History,
    tools: ToolState,
    palette: StickerPalette,
    pointer: PointerState,
    /// Last pointer position over the surface, used to refresh the preview on tool changes
    hover: Option<Pos2>,
    preview: Option<Preview>,
    previews: PreviewGenerator,
    pipeline: RenderPipeline,
    exporter: ExportRenderer,
    redraw: RedrawFlag,
    canvas_size: Vec2,
}

impl Document {
    pub fn new(config: &SketchConfig) -> Self {
        Self::with_tools(config, ToolState::new(config))
    }

    /// Document with reproducible style sampling
    pub fn with_seed(config: &SketchConfig, seed: u64) -> Self {
        Self::with_tools(config, ToolState::with_seed(config, seed))
    }

    pub fn with_tools(config: &SketchConfig, tools: ToolState) -> Self {
        Self {
            history: History::new(),
            tools,
            palette: StickerPalette::new(&config.stickers),
            pointer: PointerState::Idle,
            hover: None,
            preview: None,
            previews: PreviewGenerator::new(config.preview_alpha),
            pipeline: RenderPipeline::new(),
            exporter: ExportRenderer::from_config(config),
            redraw: RedrawFlag::default(),
            canvas_size: config.canvas_size(),
        }
    }

    // ---- pointer feed ----

    /// Start a new mark at `at` with the current tool and style, and commit it.
    pub fn pointer_down(&mut self, at: Pos2) {
        if self.pointer.is_drawing() {
            // Missed the release; finish the previous mark first
            self.end_drawing();
        }

        let command = self.tools.begin_command(at);
        self.history.commit(command);
        self.pointer = PointerState::Drawing {
            index: self.history.len() - 1,
        };
        self.hover = Some(at);
        self.preview = None;
        self.redraw.mark();
    }

    /// Extend the live command while drawing, otherwise move the preview.
    pub fn pointer_move(&mut self, at: Pos2) {
        self.hover = Some(at);
        match self.pointer.live_index() {
            Some(index) => {
                if let Some(command) = self.history.get_mut(index) {
                    command.extend(at);
                }
            }
            None => {
                self.preview = self.previews.update(at, &self.tools, false);
            }
        }
        self.redraw.mark();
    }

    /// Finish the live command; it stays committed.
    pub fn pointer_up(&mut self) {
        if self.pointer.is_drawing() {
            self.end_drawing();
            self.redraw.mark();
        }
    }

    /// Same as `pointer_up`, and the preview goes away with the pointer.
    pub fn pointer_leave(&mut self) {
        self.end_drawing();
        self.hover = None;
        if self.preview.take().is_some() {
            log::trace!("preview discarded");
        }
        self.redraw.mark();
    }

    fn end_drawing(&mut self) {
        if let Some(index) = self.pointer.live_index() {
            log::debug!("finished command #{index}");
        }
        self.pointer = PointerState::Idle;
    }

    // ---- tool feed ----

    pub fn select_thin(&mut self) {
        self.tools.select_thin();
        self.tool_changed();
    }

    pub fn select_thick(&mut self) {
        self.tools.select_thick();
        self.tool_changed();
    }

    pub fn select_sticker(&mut self, glyph: &str) -> Result<(), ToolError> {
        self.tools.select_sticker(glyph).inspect_err(|err| {
            log::warn!("Rejected sticker selection: {err}");
        })?;
        self.tool_changed();
        Ok(())
    }

    /// Add a custom sticker to the palette and select it.
    pub fn add_sticker(&mut self, glyph: &str) -> Result<usize, ToolError> {
        let index = self.palette.add(glyph).inspect_err(|err| {
            log::warn!("Rejected custom sticker: {err}");
        })?;
        let glyph = self.palette.glyphs()[index].clone();
        self.select_sticker(&glyph)?;
        log::info!("Added sticker {glyph}");
        Ok(index)
    }

    fn tool_changed(&mut self) {
        if let Some(at) = self.hover {
            self.preview = self
                .previews
                .update(at, &self.tools, self.pointer.is_drawing());
        }
        self.redraw.mark();
    }

    // ---- command feed ----

    /// Undo the last mark. Ends any drawing in progress first.
    pub fn undo(&mut self) -> bool {
        self.end_drawing();
        let changed = self.history.undo();
        if changed {
            self.redraw.mark();
        }
        changed
    }

    /// Redo the last undone mark. Ends any drawing in progress first.
    pub fn redo(&mut self) -> bool {
        self.end_drawing();
        let changed = self.history.redo();
        if changed {
            self.redraw.mark();
        }
        changed
    }

    /// Erase the drawing and its redo history.
    pub fn clear(&mut self) {
        self.end_drawing();
        self.history.clear();
        log::info!("Cleared drawing");
        self.redraw.mark();
    }

    /// Rasterize the committed drawing at `scale` without touching document state.
    pub fn export_image(&self, scale: f32) -> ExportResult<RgbaImage> {
        self.exporter.render(self.history.snapshot(), scale)
    }

    /// Rasterize at `scale` and hand the result to `sink`.
    pub fn export(&self, scale: f32, sink: &mut dyn ExportSink) -> ExportResult<()> {
        let image = self.export_image(scale).inspect_err(|err| {
            log::warn!("Export failed: {err}");
        })?;
        sink.accept(&image).inspect_err(|err| {
            log::warn!("Export sink failed: {err}");
        })
    }

    /// Apply one input event.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown(at) => self.pointer_down(at),
            InputEvent::PointerMove(at) => self.pointer_move(at),
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::Shortcut(Shortcut::Undo) => {
                self.undo();
            }
            InputEvent::Shortcut(Shortcut::Redo) => {
                self.redo();
            }
        }
    }

    // ---- rendering ----

    /// Repaint `surface` with the committed list and the preview.
    pub fn render(&self, surface: &mut dyn Surface) {
        self.pipeline
            .redraw(surface, self.history.snapshot(), self.preview.as_ref());
    }

    /// Returns true once per batch of mutations since the last call.
    pub fn take_redraw(&mut self) -> bool {
        self.redraw.take()
    }

    // ---- queries ----

    pub fn commands(&self) -> &[DrawCommand] {
        self.history.snapshot()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn selection(&self) -> &ToolSelection {
        self.tools.selection()
    }

    pub fn palette(&self) -> &StickerPalette {
        &self.palette
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn pointer_state(&self) -> PointerState {
        self.pointer
    }

    pub fn is_drawing(&self) -> bool {
        self.pointer.is_drawing()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    pub fn status_line(&self) -> String {
        format!(
            "{} · {} marks · {} redoable",
            self.tools.selection(),
            self.history.len(),
            self.history.redo_len()
        )
    }
}
