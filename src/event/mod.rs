mod bus;
mod events;

pub use bus::EventBus;
pub use events::SignatureEvent;

pub trait EventHandler {
    fn handle_event(&mut self, event: &SignatureEvent);
}

impl<F> EventHandler for F
where
    F: FnMut(&SignatureEvent),
{
    fn handle_event(&mut self, event: &SignatureEvent) {
        self(event)
    }
}
