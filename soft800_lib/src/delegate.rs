/*
 * Delegate
 * An ordered list of callbacks, each one registered with a parameter. When
 * the delegate is invoked, every callback whose parameter passes the shared
 * filter is called with the argument, in registration order.
 * Register observers use the default filter (always call), breakpoints are
 * filtered on their address and predicate.
 */
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(usize);

type Callback<A> = Box<dyn Fn(&A)>;

pub struct Delegate<A: ?Sized, P = ()> {
    entries: Vec<(Handle, Callback<A>, P)>,
    filter: fn(&P, &A) -> bool,
    next_handle: usize,
}

fn always<A: ?Sized, P>(_: &P, _: &A) -> bool {
    true
}

impl<A: ?Sized, P> Delegate<A, P> {
    pub fn new() -> Self {
        Delegate::with_filter(always::<A, P>)
    }

    pub fn with_filter(filter: fn(&P, &A) -> bool) -> Self {
        Delegate {
            entries: Vec::new(),
            filter,
            next_handle: 0,
        }
    }

    pub fn add(&mut self, callback: impl Fn(&A) + 'static, parameter: P) -> Handle {
        let handle = Handle(self.next_handle);
        self.next_handle += 1;
        self.entries.push((handle, Box::new(callback), parameter));

        handle
    }

    /// Remove the entry registered with this handle. Return false if there
    /// was none.
    pub fn remove(&mut self, handle: Handle) -> bool {
        match self.entries.iter().position(|(h, _, _)| *h == handle) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Call the callbacks passing the filter, return how many were called.
    pub fn invoke(&self, argument: &A) -> usize {
        let mut count = 0;

        for (_, callback, parameter) in self.entries.iter() {
            if (self.filter)(parameter, argument) {
                callback(argument);
                count += 1;
            }
        }

        count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<A: ?Sized, P> Default for Delegate<A, P> {
    fn default() -> Self {
        Delegate::new()
    }
}

impl<A: ?Sized, P> fmt::Debug for Delegate<A, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Delegate [{} callbacks]", self.entries.len())
    }
}
