/// Decides whether a continuation line belongs to the stack trace.
///
/// The assembler consults exactly one classifier, so the frame policy can be
/// swapped without touching the assembly logic. Any `Fn(&str) -> bool`
/// is a classifier.
pub trait FrameClassifier {
    fn is_stack_frame(&self, line: &str) -> bool;
}

impl<F> FrameClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_stack_frame(&self, line: &str) -> bool {
        self(line)
    }
}
