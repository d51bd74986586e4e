use std::io::Write;

/// Ordered sink of text lines. The core never reads it back.
pub trait Renderer {
    fn line(&mut self, line: &str);

    fn lines(&mut self, lines: &[String]) {
        lines.iter().for_each(|l| self.line(l));
    }
}

impl Renderer for Vec<String> {
    fn line(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

/// Writes every line to `inner`; write failures are logged and dropped.
pub struct WriteRenderer<W: Write> {
    pub inner: W,
}

impl<W: Write> WriteRenderer<W> {
    pub fn new(inner: W) -> Self {
        WriteRenderer { inner }
    }
}

impl<W: Write> Renderer for WriteRenderer<W> {
    fn line(&mut self, line: &str) {
        if let Err(error) = writeln!(self.inner, "{}", line) {
            log::warn!("dropped output line: {}", error);
        }
    }
}

/// Forwards lines to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn line(&mut self, line: &str) {
        log::info!("{}", line);
    }
}

/// Which rendering implementation produced a [`Rendering`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// `a1*x1 + a2*x2 = b`
    Standard,
    /// `[ a b ] [ x1 ] = [ c ]`, 2x2 only
    Bracketed,
    /// `| a b c | d |`, 3x3 only
    Augmented,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rendering {
    pub style: RenderStyle,
    pub lines: Vec<String>,
}

impl Rendering {
    pub fn emit(&self, sink: &mut dyn Renderer) {
        sink.lines(&self.lines);
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_renderer() {
        let rendering = Rendering {
            style: RenderStyle::Standard,
            lines: vec!["first".into(), "second".into()],
        };
        let mut sink = WriteRenderer::new(Vec::new());
        rendering.emit(&mut sink);
        assert_eq!(String::from_utf8(sink.inner).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_vec_renderer_keeps_order() {
        let mut sink: Vec<String> = vec![];
        sink.line("a");
        sink.lines(&["b".to_string(), "c".to_string()]);
        LogRenderer.line("not collected");
        assert_eq!(sink, vec!["a", "b", "c"]);
    }
}
