/// One selected element, as delivered to a [`SelectionSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<E> {
    /// The selected element.
    pub element: E,
    /// Absolute 0-based position of the element in the population.
    pub index: usize,
    /// Number of elements passed over since the previous selection.
    pub skip: usize,
}

/// Receives selections from a [`SamplingSession`](crate::SamplingSession).
///
/// Called synchronously, once per selected element, in increasing index
/// order. An error stops the session and is returned to the caller as
/// [`Error::Sink`](crate::Error::Sink).
///
/// Implemented for every `FnMut(Selection<E>) -> Result<(), X>`.
pub trait SelectionSink<E> {
    type Error;

    fn on_selected(&mut self, selection: Selection<E>) -> Result<(), Self::Error>;
}

impl<E, X, F> SelectionSink<E> for F
where
    F: FnMut(Selection<E>) -> Result<(), X>,
{
    type Error = X;

    #[inline]
    fn on_selected(&mut self, selection: Selection<E>) -> Result<(), X> {
        self(selection)
    }
}
