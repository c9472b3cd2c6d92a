//! Activation sinks.
//!
//! A sink observes every activation as it is emitted, in emission order.
//! Hosts use it to drive animation or logging. The engine never reads from
//! a sink, so the activation log is the same whether one is attached or not.

use crate::triggers::Activation;

/// Observer of emitted activations.
pub trait ActivationSink {
    /// Called once per emitted activation.
    fn on_activation(&mut self, activation: &Activation);
}

impl<F> ActivationSink for F
where
    F: FnMut(&Activation),
{
    fn on_activation(&mut self, activation: &Activation) {
        self(activation)
    }
}
