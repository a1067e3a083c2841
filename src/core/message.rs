//! Message values carried by log records
//!
//! A record's message can be any value that implements [`LogMessage`]. The
//! trait is object safe so a [`Record`](super::Record) can borrow the message
//! as `&dyn LogMessage` while still allowing equality checks and downcasts.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

/// Upcast to [`Any`], implemented for every `'static` type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Value equality across trait objects, implemented for every `PartialEq` type.
///
/// Values of different concrete types are never equal.
pub trait DynEq {
    fn dyn_eq(&self, other: &dyn Any) -> bool;
}

impl<T: PartialEq + Any> DynEq for T {
    fn dyn_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }
}

/// A value that can be logged as a record message.
///
/// Messages must be `'static` so they can be downcast. A `&str` borrowed
/// from a local `String` is therefore not a message; pass the `String`
/// itself, or a clone of it:
///
/// ```
/// # use monolog::prelude::*;
/// # let logger = Monolog::new(vec![Box::new(NullHandler::new(LevelSet::all()))]).unwrap();
/// let name = String::from("checkout");
/// logger.info(name.clone()).unwrap();
/// logger.info(name).unwrap();
/// ```
///
/// ```compile_fail
/// # use monolog::prelude::*;
/// # let logger = Monolog::new(vec![Box::new(NullHandler::new(LevelSet::all()))]).unwrap();
/// let name = String::from("checkout");
/// logger.info(name.as_str()).unwrap();
/// ```
///
/// Opting in is a one-line impl for any `Display + Debug + PartialEq` type:
///
/// ```
/// use monolog::LogMessage;
/// use std::fmt;
///
/// #[derive(Debug, PartialEq)]
/// struct CheckoutScreen;
///
/// impl fmt::Display for CheckoutScreen {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("CheckoutScreen")
///     }
/// }
///
/// impl LogMessage for CheckoutScreen {
///     fn display_name(&self) -> Option<&str> {
///         Some("Checkout")
///     }
/// }
/// ```
pub trait LogMessage: fmt::Display + fmt::Debug + AsAny + DynEq + Send + Sync {
    /// A stable, human facing name for this message.
    ///
    /// Sinks prefer this over `Display` when it is present.
    fn display_name(&self) -> Option<&str> {
        None
    }
}

impl<'a> dyn LogMessage + 'a {
    /// Attempt to view the message as a concrete type.
    pub fn downcast_ref<T: LogMessage>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn is<T: LogMessage>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Equality by concrete type and value.
    pub fn message_eq(&self, other: &dyn LogMessage) -> bool {
        self.dyn_eq(other.as_any())
    }

    /// The display name when present, the `Display` rendering otherwise.
    pub fn displayed(&self) -> Cow<'_, str> {
        match self.display_name() {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(self.to_string()),
        }
    }
}

macro_rules! impl_log_message {
    ($($ty:ty),* $(,)?) => {
        $(impl LogMessage for $ty {})*
    };
}

impl_log_message!(
    String,
    &'static str,
    Cow<'static, str>,
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
);
