//! Saloon service with boundary logging.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for every registry operation:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

use saloon_core::ops::{saloon_ops, service_ops};
use saloon_core::{
    apply, log_op_end, log_op_error, log_op_start, Command, CommandResult, Environment, ExError,
    RecordStore, Saloon, SaloonPayload, SaloonUpdate, ServicePayload,
};
use saloon_core_types::RequestContext;

type Result<T> = std::result::Result<T, ExError>;

/// Registry facade over a record store and an environment
pub struct SaloonService<S, E> {
    store: S,
    env: E,
}

impl<S: RecordStore, E: Environment> SaloonService<S, E> {
    pub fn new(store: S, env: E) -> Self {
        Self { store, env }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Every stored saloon
    ///
    /// # Errors
    ///
    /// `EmptyCollection` when nothing is stored.
    pub fn list_saloons(&self) -> Result<Vec<Saloon>> {
        let store = &self.store;
        let saloons = observe("list_saloons", None, &self.env, || {
            saloon_ops::list_saloons(store)
        })?;
        tracing::debug!(saloon_count = saloons.len(), "listed saloons");
        Ok(saloons)
    }

    /// # Errors
    ///
    /// `InvalidArgument` for an empty id, `NotFound` for an unknown one.
    pub fn get_saloon(&self, saloon_id: &str) -> Result<Saloon> {
        let store = &self.store;
        observe("get_saloon", Some(saloon_id), &self.env, || {
            saloon_ops::get_saloon(store, saloon_id)
        })
    }

    /// Create a saloon owned by the current caller
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when a field is missing or blank.
    pub fn create_saloon(&mut self, payload: SaloonPayload) -> Result<Saloon> {
        let (store, env) = (&mut self.store, &self.env);
        observe("create_saloon", None, env, || {
            saloon_ops::create_saloon(store, env, payload)
        })
    }

    /// Append a service to a saloon the caller owns
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a NaN or infinite amount, then `NotFound` or
    /// `PermissionDenied`.
    pub fn add_service(&mut self, saloon_id: &str, payload: ServicePayload) -> Result<Saloon> {
        let (store, env) = (&mut self.store, &self.env);
        observe("add_service", Some(saloon_id), env, || {
            service_ops::add_service(store, env, saloon_id, payload)
        })
    }

    /// Remove a saloon the caller owns, returning it
    ///
    /// # Errors
    ///
    /// `NotFound` or `PermissionDenied`.
    pub fn delete_saloon(&mut self, saloon_id: &str) -> Result<Saloon> {
        let (store, env) = (&mut self.store, &self.env);
        observe("delete_saloon", Some(saloon_id), env, || {
            saloon_ops::delete_saloon(store, env, saloon_id)
        })
    }

    /// # Errors
    ///
    /// `InvalidArgument` for a rate outside [0, 5], or `NotFound`.
    pub fn rate_saloon(&mut self, saloon_id: &str, rate: f64) -> Result<Saloon> {
        let (store, env) = (&mut self.store, &self.env);
        observe("rate_saloon", Some(saloon_id), env, || {
            saloon_ops::rate_saloon(store, env, saloon_id, rate)
        })
    }

    /// # Errors
    ///
    /// `NotFound` or `PermissionDenied`.
    pub fn update_saloon(&mut self, saloon_id: &str, update: SaloonUpdate) -> Result<Saloon> {
        let (store, env) = (&mut self.store, &self.env);
        observe("update_saloon", Some(saloon_id), env, || {
            saloon_ops::update_saloon(store, env, saloon_id, update)
        })
    }

    /// Run any command through `apply()`
    ///
    /// # Errors
    ///
    /// The command's error, converted to `ExError`.
    pub fn execute(&mut self, cmd: Command) -> Result<CommandResult> {
        let op = cmd.op_name();
        let saloon_id = cmd.saloon_id().map(str::to_owned);
        let (store, env) = (&mut self.store, &self.env);
        observe(op, saloon_id.as_deref(), env, || apply(store, env, cmd))
    }
}

/// Wrap one operation in start/end logging and error conversion
fn observe<T, E: Environment>(
    op: &'static str,
    saloon_id: Option<&str>,
    env: &E,
    f: impl FnOnce() -> saloon_core::Result<T>,
) -> Result<T> {
    let ctx = RequestContext::new();
    let caller = env.caller_identity();

    log_op_start!(
        op,
        saloon_id = saloon_id,
        caller = caller.as_str(),
        request_id = ctx.request_id.as_str()
    );

    let value = f().map_err(|e| {
        log_op_error!(
            op,
            e.clone(),
            duration_ms = ctx.elapsed_ms(),
            saloon_id = saloon_id,
            request_id = ctx.request_id.as_str()
        );
        ExError::from(e)
            .with_op(op)
            .with_request_id(ctx.request_id.clone())
    })?;

    log_op_end!(
        op,
        duration_ms = ctx.elapsed_ms(),
        saloon_id = saloon_id,
        request_id = ctx.request_id.as_str()
    );

    Ok(value)
}
