//! End-to-end role scenarios: one identity, one render of `/app/dashboard`,
//! sidebar and dashboard checked together.

use healthaid_core::{DashboardVariant, Identity, OrgRole, SidebarVariant, UserType};
use healthaid_shell::{App, ContentRegion, IdentityStore, RenderTree};
use pretty_assertions::assert_eq;
use rstest::rstest;
use schemars::schema_for;

fn dashboard_render(app: &App) -> (SidebarVariant, DashboardVariant) {
    match app.render("/app/dashboard").expect("store is in scope") {
        RenderTree::App {
            sidebar,
            content: ContentRegion::Dashboard { variant, .. },
        } => (sidebar.variant, variant),
        other => panic!("expected dashboard in app shell, got {other:?}"),
    }
}

#[rstest]
#[case::admin(Identity::admin(), SidebarVariant::Admin, DashboardVariant::Admin)]
#[case::plain_user(Identity::user(), SidebarVariant::Common, DashboardVariant::Common)]
#[case::org_admin(
    Identity::organization(Some(OrgRole::OrgAdmin)),
    SidebarVariant::Org,
    DashboardVariant::Org
)]
#[case::org_staff(
    Identity::organization(Some(OrgRole::Staff)),
    SidebarVariant::Staff,
    DashboardVariant::Staff
)]
#[case::org_doctor(
    Identity::organization(Some(OrgRole::Doctor)),
    SidebarVariant::Staff,
    DashboardVariant::Staff
)]
#[case::unknown_user_type(
    Identity::new(UserType::Unrecognized, None),
    SidebarVariant::Common,
    DashboardVariant::Common
)]
fn role_scenarios(
    #[case] identity: Identity,
    #[case] sidebar: SidebarVariant,
    #[case] dashboard: DashboardVariant,
) {
    let app = App::new(IdentityStore::with_identity(identity));
    assert_eq!(dashboard_render(&app), (sidebar, dashboard));
}

#[test]
fn mutation_clears_role() {
    let app = App::new(IdentityStore::with_identity(Identity::organization(Some(
        OrgRole::OrgAdmin,
    ))));
    assert_eq!(
        dashboard_render(&app),
        (SidebarVariant::Org, DashboardVariant::Org)
    );

    app.store().set_user_type(UserType::User);

    let identity = app.store().identity();
    assert_eq!(identity.user_type(), UserType::User);
    assert_eq!(identity.org_role(), None);
    assert_eq!(
        dashboard_render(&app),
        (SidebarVariant::Common, DashboardVariant::Common)
    );
}

#[test]
fn session_walkthrough_rerenders_after_each_mutation() {
    let app = App::new(IdentityStore::new());
    let mut seen = vec![dashboard_render(&app)];

    app.store().set_user_type(UserType::Organization);
    seen.push(dashboard_render(&app));
    app.store().set_org_role(Some(OrgRole::OrgAdmin));
    seen.push(dashboard_render(&app));
    app.store().set_user_type(UserType::Admin);
    seen.push(dashboard_render(&app));

    assert_eq!(
        seen,
        vec![
            (SidebarVariant::Common, DashboardVariant::Common),
            (SidebarVariant::Staff, DashboardVariant::Staff),
            (SidebarVariant::Org, DashboardVariant::Org),
            (SidebarVariant::Admin, DashboardVariant::Admin),
        ]
    );
}

#[test]
fn render_tree_matches_its_schema() {
    let schema = serde_json::to_value(schema_for!(RenderTree)).unwrap();
    let validator = jsonschema::validator_for(&schema).expect("schema should be valid");

    let app = App::new(IdentityStore::with_identity(Identity::organization(Some(
        OrgRole::Nurse,
    ))));
    for path in ["/", "/login", "/signup", "/app/dashboard", "/app/meds", "/app", "/nope"] {
        let tree = app.render(path).unwrap();
        let instance = serde_json::to_value(&tree).unwrap();
        let errors = validator
            .iter_errors(&instance)
            .map(|e| format!("{e}"))
            .collect::<Vec<_>>();
        assert!(errors.is_empty(), "{path}: {errors:?}");
    }
}

#[test]
fn dashboard_json_shape() {
    let app = App::new(IdentityStore::with_identity(Identity::admin()));
    let json = serde_json::to_value(app.render("/app/dashboard").unwrap()).unwrap();
    assert_eq!(json["shell"], "app");
    assert_eq!(json["sidebar"]["variant"], "admin");
    assert_eq!(json["sidebar"]["component"], "AdminSidebar");
    assert_eq!(json["sidebar"]["state"], "expanded");
    assert_eq!(json["content"]["content"], "dashboard");
    assert_eq!(json["content"]["component"], "AdminDashboard");
}
