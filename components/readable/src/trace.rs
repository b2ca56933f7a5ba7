//! Stack-trace rendering.

use tracing::debug;

use crate::error::Throwable;
use crate::source::Frame;
use crate::{Readable, Value};

/// Returned for sources that carry no stack trace.
const TRACE_UNAVAILABLE: &str = "{stack-trace unavailable}";

/// Shown in place of the file of frames without one.
const INTERNAL_FUNCTION: &str = "[internal function]";

/// Input accepted by [`Readable::render_trace`].
#[derive(Debug, Clone, Copy)]
pub enum TraceSource<'a> {
    /// The call stack captured by an error
    Error(&'a Throwable),
    /// An explicit frame sequence
    Frames(&'a [Frame]),
    /// A container of frame records; any other value has no trace
    Value(&'a Value),
}

impl<'a> From<&'a Throwable> for TraceSource<'a> {
    fn from(error: &'a Throwable) -> Self {
        TraceSource::Error(error)
    }
}

impl<'a> From<&'a [Frame]> for TraceSource<'a> {
    fn from(frames: &'a [Frame]) -> Self {
        TraceSource::Frames(frames)
    }
}

impl<'a> From<&'a Vec<Frame>> for TraceSource<'a> {
    fn from(frames: &'a Vec<Frame>) -> Self {
        TraceSource::Frames(frames)
    }
}

impl<'a> From<&'a Value> for TraceSource<'a> {
    fn from(value: &'a Value) -> Self {
        TraceSource::Value(value)
    }
}

impl Readable {
    /// Render a stack trace as a numbered listing, one frame per line.
    ///
    /// Depth labels are right-aligned so their ones digits line up. With
    /// `with_params` the call arguments are listed the way
    /// [`format_values`](Readable::format_values) lists them, so named
    /// arguments keep their keys; with `relative_paths` file paths are shown
    /// relative to the configured root. A frame without a function renders
    /// as `file:line` alone, with no trailing space.
    ///
    /// # Examples
    ///
    /// ```
    /// use readable::{CallType, Frame, Readable, Value};
    ///
    /// let frames = vec![
    ///     Frame::new()
    ///         .with_file("/app/fixtures.php", 29)
    ///         .with_method("TraceTest", CallType::Instance, "inner")
    ///         .with_args(vec![Value::from("hello")]),
    ///     Frame::new().with_function("main"),
    /// ];
    ///
    /// assert_eq!(
    ///     Readable::default().render_trace(&frames, true, false),
    ///     "1. /app/fixtures.php:29 TraceTest->inner(\"hello\")\n2. [internal function] main()"
    /// );
    /// ```
    pub fn render_trace<'a>(
        &self,
        source: impl Into<TraceSource<'a>>,
        with_params: bool,
        relative_paths: bool,
    ) -> String {
        let parsed: Vec<Frame>;
        let frames: &[Frame] = match source.into() {
            TraceSource::Error(error) => &error.trace,
            TraceSource::Frames(frames) => frames,
            TraceSource::Value(Value::Array(entries)) => {
                parsed = entries.values().map(Frame::from_value).collect();
                &parsed
            }
            TraceSource::Value(_) => return TRACE_UNAVAILABLE.to_string(),
        };

        debug!(frames = frames.len(), with_params, relative_paths, "rendering stack trace");

        let width = frames.len().to_string().len() + 2;

        frames
            .iter()
            .enumerate()
            .map(|(index, frame)| {
                let label = format!("{}. ", index + 1);
                format!(
                    "{:>width$}{}",
                    label,
                    self.render_frame(frame, with_params, relative_paths),
                    width = width
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_frame(&self, frame: &Frame, with_params: bool, relative_paths: bool) -> String {
        let line = frame
            .line
            .map(|line| format!(":{}", line))
            .unwrap_or_default();

        let file = frame.file.as_deref().unwrap_or(INTERNAL_FUNCTION);
        let file = if relative_paths {
            self.normalize_path(file)
        } else {
            file.to_string()
        };

        let function = frame.call_name();

        if function.is_empty() {
            return format!("{}{}", file, line);
        }

        // include/require take a single path, not an argument list
        let args = match (function.as_str(), &frame.args) {
            ("require" | "include", Some(args)) => args
                .values()
                .next()
                .map(|path| self.format_value(path))
                .unwrap_or_default(),
            ("require" | "include", None) => String::new(),
            (_, Some(args)) if with_params => self.format_values(args),
            _ => String::new(),
        };

        format!("{}{} {}({})", file, line, function, args)
    }
}
