use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, bail};
use healthaid_core::{Identity, OrgRole, UserType, ViewSelector};
use healthaid_shell::{IdentityStore, resolve};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::global::parse_org_role;
use crate::cli::root_commands::ReplayArgs;
use crate::context::AppContext;
use crate::output::output;

/// One parsed `key=value` mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    UserType(UserType),
    OrgRole(Option<OrgRole>),
}

impl Step {
    fn parse(raw: &str) -> anyhow::Result<Self> {
        let (key, value) = raw
            .split_once('=')
            .with_context(|| format!("step `{raw}` must look like key=value"))?;

        match key.trim() {
            "user_type" => Ok(Self::UserType(UserType::parse_lenient(value))),
            "org_role" => Ok(Self::OrgRole(parse_org_role(value))),
            other => bail!("unknown step key `{other}` (expected user_type or org_role)"),
        }
    }

    fn apply(self, store: &IdentityStore) {
        match self {
            Self::UserType(user_type) => store.set_user_type(user_type),
            Self::OrgRole(org_role) => store.set_org_role(org_role),
        }
    }
}

#[derive(Debug, Serialize)]
struct ReplayRow {
    step: String,
    revision: u64,
    notified: bool,
    identity: Identity,
    selector: ViewSelector,
}

/// Handle `haid replay`.
pub fn handle(args: &ReplayArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let steps = args
        .steps
        .iter()
        .map(|raw| Step::parse(raw).map(|step| (raw.as_str(), step)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let rows = replay(ctx.app.store(), &steps);
    output(&rows, flags.format)
}

/// Apply steps in order; each row reports what a subscriber saw for that step.
fn replay(store: &IdentityStore, steps: &[(&str, Step)]) -> Vec<ReplayRow> {
    let observed: Rc<RefCell<Vec<Identity>>> = Rc::default();
    let sink = Rc::clone(&observed);
    let subscription = store.subscribe(move |identity| sink.borrow_mut().push(*identity));

    let rows = steps
        .iter()
        .map(|&(raw, step)| {
            step.apply(store);
            let notification = observed.borrow_mut().pop();
            let identity = notification.unwrap_or_else(|| store.identity());
            tracing::debug!(step = raw, %identity, notified = notification.is_some(), "replayed step");
            ReplayRow {
                step: raw.to_string(),
                revision: store.revision(),
                notified: notification.is_some(),
                identity,
                selector: resolve(&identity),
            }
        })
        .collect();

    store.unsubscribe(subscription);
    rows
}
