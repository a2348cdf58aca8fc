/// Destination for human-readable output lines.
///
/// Primitives that report progress (tick labels, select events) write through
/// this trait so callers decide where text goes: stdout in the binary, a
/// `Vec<String>` in tests.
pub trait LineSink {
    fn emit(&mut self, line: &str);
}

impl LineSink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn emit(&mut self, line: &str) {
        (**self).emit(line);
    }
}
