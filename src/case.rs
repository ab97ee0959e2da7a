use thiserror::Error;

use crate::value::Value;

/// Fixture code that runs exactly once, at load time, to produce the
/// case's fixture state.
pub type SetupFn<S> = Box<dyn FnOnce() -> anyhow::Result<S>>;

/// The function under test. Reads the fixture state and the positional
/// arguments; must be deterministic given the state's post-load value.
pub type RunFn<S> = Box<dyn Fn(&S, &[Value]) -> anyhow::Result<Value>>;

/// A test-case definition: the descriptor before its fixture has run.
///
/// Declared as a struct literal, one per case. `S` is the case's own
/// fixture-state type; cases with nothing to set up use [`Case::stateless`].
pub struct Case<S> {
    pub description: String,
    pub args: Vec<Value>,
    pub expected: Value,
    pub setup: SetupFn<S>,
    pub run: RunFn<S>,
}

impl<S> Case<S> {
    /// Run the fixture setup, consuming the definition. Setup executes
    /// exactly once; a failure here means the case never becomes
    /// invokable and must be recorded as failed-to-load.
    pub fn load(self) -> Result<LoadedCase<S>, LoadError> {
        let state = (self.setup)().map_err(LoadError)?;
        Ok(LoadedCase {
            description: self.description,
            args: self.args,
            expected: self.expected,
            state,
            run: self.run,
        })
    }
}

impl Case<()> {
    /// A case with no fixture state.
    pub fn stateless(
        description: &str,
        args: Vec<Value>,
        expected: Value,
        run: impl Fn(&[Value]) -> anyhow::Result<Value> + 'static,
    ) -> Self {
        Case {
            description: description.to_string(),
            args,
            expected,
            setup: Box::new(|| Ok(())),
            run: Box::new(move |_, args| run(args)),
        }
    }
}

/// A case whose fixture has been initialized. The state is fixed for
/// the lifetime of this value; invocations read it but cannot change it,
/// and there is no re-initialization short of loading a fresh [`Case`].
pub struct LoadedCase<S> {
    description: String,
    args: Vec<Value>,
    expected: Value,
    state: S,
    run: RunFn<S>,
}

impl<S> LoadedCase<S> {
    /// The post-initialization fixture state.
    pub fn state(&self) -> &S {
        &self.state
    }
}

/// The contract a harness drives a loaded case through, object-safe so
/// cases with different fixture-state types can sit in one collection.
///
/// `invoke` trusts its caller on arity: the harness passes arguments
/// equal in count and order to `args()`'s output, and the descriptor
/// does not validate this itself.
pub trait Descriptor {
    fn description(&self) -> &str;
    fn args(&self) -> &[Value];
    fn expected(&self) -> &Value;
    fn invoke(&self, args: &[Value]) -> anyhow::Result<Value>;
}

impl<S> Descriptor for LoadedCase<S> {
    fn description(&self) -> &str {
        &self.description
    }

    fn args(&self) -> &[Value] {
        &self.args
    }

    fn expected(&self) -> &Value {
        &self.expected
    }

    fn invoke(&self, args: &[Value]) -> anyhow::Result<Value> {
        (self.run)(&self.state, args)
    }
}

/// Fixture setup failed, so the case never reached its loaded state.
#[derive(Debug, Error)]
#[error("fixture setup failed: {0}")]
pub struct LoadError(pub anyhow::Error);
