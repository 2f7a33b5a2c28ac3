use std::{
    cell::{Cell, RefCell},
    io,
    rc::Rc,
    sync::{Arc, Mutex},
};

use strand_core::{Chain, Handler, InvokeError};

use super::{Accessors, Config, Event, SubscribeError, Subscribers, Unique};

/// A component that owns an event and only exposes its subscribers.
#[derive(Default)]
struct Thermostat {
    changed: Event<f64>,
    setpoint: f64,
}

impl Thermostat {
    fn on_change(&mut self) -> Subscribers<'_, f64> {
        self.changed.subscribers()
    }

    fn set(&mut self, setpoint: f64) -> Result<(), InvokeError> {
        self.setpoint = setpoint;
        self.changed.publish(&self.setpoint)
    }
}

fn recorder(seen: &Rc<RefCell<Vec<f64>>>) -> Handler<f64> {
    let seen = Rc::clone(seen);
    Handler::new(move |value: &f64| seen.borrow_mut().push(*value))
}

#[test]
fn publish_without_subscribers_fails() {
    let event: Event<()> = Event::new();

    assert!(!event.has_subscribers());
    assert_eq!(event.publish(&()), Err(InvokeError::NullInvocation));
    assert!(!event.publish_if_present(&()));
}

#[test]
fn owner_publishes_to_outside_subscribers() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let handler = recorder(&seen);
    let mut thermostat = Thermostat::default();

    thermostat.on_change().subscribe(handler.clone()).unwrap();
    thermostat.set(21.5).unwrap();
    thermostat.set(19.0).unwrap();

    assert_eq!(*seen.borrow(), [21.5, 19.0]);

    assert!(thermostat.on_change().unsubscribe(&handler));
    assert_eq!(thermostat.set(18.0), Err(InvokeError::NullInvocation));
    assert_eq!(thermostat.setpoint, 18.0);
}

#[test]
fn unsubscribe_reports_whether_anything_was_removed() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let handler = recorder(&seen);
    let mut event = Event::new();

    event.subscribe(handler.clone()).unwrap();
    event.subscribe(handler.clone()).unwrap();

    assert!(event.unsubscribe(&handler));
    assert!(event.has_subscribers());
    assert!(event.unsubscribe(&handler));
    assert!(!event.has_subscribers());
    assert!(!event.unsubscribe(&handler));
}

#[test]
fn subscriber_limit_rejects_extra_subscriptions() {
    let config = Config::new("limited", Some(1)).unwrap();
    let mut event: Event<()> = Event::with_config(config);
    let first = Handler::new(|_: &()| {});
    let second = Handler::new(|_: &()| {});

    event.subscribe(first.clone()).unwrap();
    assert_eq!(
        event.subscribe(second.clone()),
        Err(SubscribeError::Full { limit: 1 })
    );
    assert!(!event.is_subscribed(&second));

    event.unsubscribe(&first);
    event.subscribe(second.clone()).unwrap();
    assert!(event.is_subscribed(&second));
}

#[test]
fn unique_accessors_ignore_repeat_subscriptions() {
    let calls = Rc::new(Cell::new(0));
    let handler = Handler::new({
        let calls = Rc::clone(&calls);
        move |_: &()| calls.set(calls.get() + 1)
    });
    let mut event = Event::with_accessors(Config::default(), Unique);

    event.subscribe(handler.clone()).unwrap();
    event.subscribe(handler.clone()).unwrap();
    assert_eq!(event.subscriber_count(), 1);

    event.publish(&()).unwrap();
    assert_eq!(calls.get(), 1);

    assert!(event.unsubscribe(&handler));
    assert!(!event.has_subscribers());
}

#[test]
fn ignored_resubscription_at_the_limit_is_not_rejected() {
    let handler = Handler::new(|_: &()| {});
    let other = Handler::new(|_: &()| {});
    let config = Config::new("capped", Some(1)).unwrap();
    let mut event = Event::with_accessors(config, Unique);

    event.subscribe(handler.clone()).unwrap();
    assert_eq!(event.subscribe(handler.clone()), Ok(()));
    assert_eq!(event.subscriber_count(), 1);

    assert_eq!(
        event.subscribe(other.clone()),
        Err(SubscribeError::Full { limit: 1 })
    );
    assert!(!event.is_subscribed(&other));
    assert_eq!(*event.chain(), Chain::from(handler));
}

/// Accessors that record every add and remove.
#[derive(Debug, Default)]
struct Audited {
    added: usize,
    removed: usize,
}

impl<A> Accessors<A> for Audited {
    fn add(&mut self, chain: Chain<A>, handler: Handler<A>) -> Chain<A> {
        self.added += 1;
        chain.append(handler)
    }

    fn remove(&mut self, chain: Chain<A>, handler: &Handler<A>) -> Chain<A> {
        self.removed += 1;
        chain.remove(handler)
    }
}

#[test]
fn custom_accessors_see_every_change() {
    let handler = Handler::new(|_: &u8| {});
    let mut event = Event::with_accessors(Config::default(), Audited::default());

    event.subscribe(handler.clone()).unwrap();
    event.subscribe(handler.clone()).unwrap();
    event.unsubscribe(&handler);

    let rendered = format!("{event:?}");
    assert!(rendered.contains("added: 2"));
    assert!(rendered.contains("removed: 1"));
    assert_eq!(event.subscriber_count(), 1);
}

/// A writer that appends to a shared buffer.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("capture lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("capture lock")).into_owned()
    }
}

#[test]
fn subscription_changes_are_logged_with_the_event_name() {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer({
            let capture = capture.clone();
            move || capture.clone()
        })
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let config = Config::new("door_opened", Some(1)).unwrap();
        let mut event: Event<()> = Event::with_config(config);

        event.subscribe(Handler::new(|_: &()| {})).unwrap();
        let _ = event.subscribe(Handler::new(|_: &()| {}));
    });

    let logs = capture.contents();
    assert!(logs.contains("subscribed"), "missing subscribe record: {logs}");
    assert!(logs.contains("event=\"door_opened\""), "missing name: {logs}");
    assert!(logs.contains("subscription rejected"), "missing warning: {logs}");
}

#[test]
fn both_publish_forms_are_logged() {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer({
            let capture = capture.clone();
            move || capture.clone()
        })
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let config = Config::new("kettle_boiled", None).unwrap();
        let mut event: Event<()> = Event::with_config(config);
        event.subscribe(Handler::new(|_: &()| {})).unwrap();

        event.publish(&()).unwrap();
        assert!(event.publish_if_present(&()));
    });

    let logs = capture.contents();
    let publishes = logs
        .lines()
        .filter(|line| line.contains("publishing") && line.contains("event=\"kettle_boiled\""))
        .count();
    assert_eq!(publishes, 2, "expected one record per publish: {logs}");
}
