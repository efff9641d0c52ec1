mod notifier;

pub use notifier::{EmailApiNotifier, INotifier, InMemoryNotifier, LogNotifier};
