//! Shared handles to elements mounted by the host.
//!
//! The host inserts an element into its document and the block keeps writing
//! to the same element afterwards. [`LiveElement`] models that shared identity
//! with a single-threaded `Rc<RefCell<..>>`; clones refer to the same element.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::events::KeyboardEvent;
use crate::html::parse_fragment;
use crate::node::Node;

/// Listener invoked on key release with the element and the event
pub type KeyUpListener = Box<dyn Fn(&mut Node, &KeyboardEvent)>;

struct Inner {
    node: Node,
    key_up: Vec<KeyUpListener>,
}

/// A mounted element shared between the block and the host
#[derive(Clone)]
pub struct LiveElement {
    inner: Rc<RefCell<Inner>>,
}

impl LiveElement {
    pub fn new(node: Node) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                node,
                key_up: Vec::new(),
            })),
        }
    }

    /// Serialized markup of the element's children
    pub fn inner_html(&self) -> String {
        self.inner.borrow().node.inner_html()
    }

    /// Replace the element's children with parsed markup
    pub fn set_inner_html(&self, html: &str) {
        let children = parse_fragment(html);
        self.inner.borrow_mut().node.set_children(children);
    }

    pub fn text_content(&self) -> String {
        self.inner.borrow().node.text_content()
    }

    pub fn tag_name(&self) -> String {
        self.inner.borrow().node.tag_name().to_string()
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.inner.borrow().node.attr(name).map(str::to_string)
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.inner.borrow().node.has_class(name)
    }

    /// A detached copy of the current node tree
    pub fn snapshot(&self) -> Node {
        self.inner.borrow().node.clone()
    }

    /// Run `f` with mutable access to the node tree
    pub fn with_node_mut<R>(&self, f: impl FnOnce(&mut Node) -> R) -> R {
        f(&mut self.inner.borrow_mut().node)
    }

    /// Register a key-release listener
    pub fn on_key_up<F>(&self, listener: F)
    where
        F: Fn(&mut Node, &KeyboardEvent) + 'static,
    {
        self.inner.borrow_mut().key_up.push(Box::new(listener));
    }

    pub fn key_up_listener_count(&self) -> usize {
        self.inner.borrow().key_up.len()
    }

    /// Deliver a key-release event to every registered listener, in order
    ///
    /// Listeners run on a detached copy of the node, so they may freely use
    /// other handles to this element; their changes are written back after
    /// each call.
    pub fn dispatch_key_up(&self, event: &KeyboardEvent) {
        let listeners = std::mem::take(&mut self.inner.borrow_mut().key_up);
        for listener in &listeners {
            let mut node = self.snapshot();
            listener(&mut node, event);
            self.inner.borrow_mut().node = node;
        }

        // Keep listeners registered while dispatching, after the existing ones
        let mut inner = self.inner.borrow_mut();
        let added = std::mem::replace(&mut inner.key_up, listeners);
        inner.key_up.extend(added);
    }

    /// Whether both handles refer to the same element
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for LiveElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("LiveElement")
            .field("node", &inner.node)
            .field("key_up_listeners", &inner.key_up.len())
            .finish()
    }
}
