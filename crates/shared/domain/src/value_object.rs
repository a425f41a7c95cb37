//! Identity-less value object base.

/// Immutable property bag compared structurally.
///
/// There is no mutable accessor: a changed value is a new instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueObject<P> {
    props: P,
}

impl<P> ValueObject<P> {
    pub fn create(props: P) -> Self {
        Self { props }
    }

    pub fn props(&self) -> &P {
        &self.props
    }
}
