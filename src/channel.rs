//! The host side of the method channel, as seen from the plugin.

use crate::value::EncodableValue;

/// Channel the host's picker API talks to.
pub const CHANNEL_NAME: &str = "miguelruivo.flutter.plugins.filepicker";

#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub method: String,
    pub arguments: Option<EncodableValue>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Option<EncodableValue>) -> Self {
        Self { method: method.into(), arguments }
    }
}

/// Reply handle the host hands out with every call. Exactly one method is
/// invoked per call.
pub trait MethodResult {
    fn success(self: Box<Self>, value: Option<EncodableValue>);
    fn error(self: Box<Self>, message: String);
    fn not_implemented(self: Box<Self>);
}

/// A finished reply, before it is handed to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResponse {
    Success(Option<EncodableValue>),
    Error(String),
    NotImplemented,
}

impl MethodResponse {
    pub fn send(self, result: Box<dyn MethodResult>) {
        match self {
            MethodResponse::Success(value) => result.success(value),
            MethodResponse::Error(message) => result.error(message),
            MethodResponse::NotImplemented => result.not_implemented(),
        }
    }
}

pub type MethodCallHandler = Box<dyn Fn(&MethodCall, Box<dyn MethodResult>)>;

/// Registration surface provided by the host runtime.
pub trait PluginRegistrar {
    fn set_method_call_handler(&mut self, channel: &str, handler: MethodCallHandler);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;

    /// Captures the reply so tests can inspect it.
    pub struct Recorder(pub Rc<RefCell<Option<MethodResponse>>>);

    impl MethodResult for Recorder {
        fn success(self: Box<Self>, value: Option<EncodableValue>) {
            *self.0.borrow_mut() = Some(MethodResponse::Success(value));
        }
        fn error(self: Box<Self>, message: String) {
            *self.0.borrow_mut() = Some(MethodResponse::Error(message));
        }
        fn not_implemented(self: Box<Self>) {
            *self.0.borrow_mut() = Some(MethodResponse::NotImplemented);
        }
    }

    #[derive(Default)]
    pub struct FakeRegistrar {
        pub handlers: HashMap<String, MethodCallHandler>,
    }

    impl PluginRegistrar for FakeRegistrar {
        fn set_method_call_handler(&mut self, channel: &str, handler: MethodCallHandler) {
            self.handlers.insert(channel.to_string(), handler);
        }
    }

    impl FakeRegistrar {
        pub fn call(&self, channel: &str, call: MethodCall) -> Option<MethodResponse> {
            let slot = Rc::new(RefCell::new(None));
            let handler = self.handlers.get(channel)?;
            handler(&call, Box::new(Recorder(slot.clone())));
            slot.borrow_mut().take()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::testing::Recorder;
    use super::*;

    #[test]
    fn response_is_forwarded_to_the_host() {
        for response in [
            MethodResponse::Success(None),
            MethodResponse::Success(Some("C:\\".into())),
            MethodResponse::Error("boom".into()),
            MethodResponse::NotImplemented,
        ] {
            let slot = Rc::new(RefCell::new(None));
            response.clone().send(Box::new(Recorder(slot.clone())));
            assert_eq!(slot.borrow().as_ref(), Some(&response));
        }
    }
}
