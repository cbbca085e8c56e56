use install_planner::planner::*;
use install_planner::{CandidateId, PlannerOptions};

const SNAPSHOT: &str = r#"{
	"licenses": [
		{ "ref": "android-sdk-license", "text": "Terms and Conditions" },
		{ "ref": "intel-android-sysimage-license", "text": "Intel Terms" }
	],
	"candidates": [
		{ "id": "tools", "name": "Android SDK Tools, revision 22", "license": 0,
		  "dependency_for": ["platform"],
		  "replaces": { "old_revision": "21", "new_revision": "22" } },
		{ "id": "platform", "name": "SDK Platform Android 4.3, API 18", "license": 0,
		  "depends_on": ["tools"], "dependency_for": ["x86-image"] },
		{ "id": "x86-image", "name": "Intel x86 Atom System Image", "license": 1,
		  "depends_on": ["platform"] },
		{ "id": "docs", "name": "Documentation for Android SDK" }
	]
}"#;

fn init_logging() {
	let _ = env_logger::builder().is_test(true).try_init();
}

fn options() -> PlannerOptions {
	let mut options = PlannerOptions::default();
	options.set_validate_snapshot(true);
	options
}

#[test]
fn review_and_commit_plan() {
	init_logging();
	let store = CandidateStore::from_json(&options(), SNAPSHOT).expect("failed to read snapshot.");

	let names: Vec<_> = store.groups().iter().map(|g| g.name()).collect();
	assert_eq!(names, ["No license", "Android SDK License", "Intel Android Sysimage License"]);
	assert_eq!(store.get(&"tools".into()).unwrap().label(), "Android SDK Tools, revision 22 [*]");
	assert_eq!(store.get(&"tools".into()).unwrap().update_summary().unwrap(), "This update will replace revision 21 with revision 22.");

	let mut session = PlanSession::new(store);

	/* Only the unlicensed documentation starts accepted */
	let status = session.status();
	assert_eq!(status.message, None);
	assert!(status.can_proceed);

	let status = session.select(Focus::Candidate("x86-image".into())).unwrap();
	assert!(!status.group_fully_accepted);

	let status = session.apply(PlanAction::AcceptFocusedGroup).unwrap();
	assert!(status.group_fully_accepted);
	assert_eq!(status.message.as_ref().unwrap().to_string(), "This package depends on 'SDK Platform Android 4.3, API 18'.");
	assert!(!status.can_proceed);

	let sdk = session.store().group_of(&"platform".into()).unwrap();
	let status = session.select(Focus::Group(sdk)).unwrap();
	assert_eq!(status.message.as_ref().unwrap().to_string(), "Package 'Intel x86 Atom System Image' depends on 'SDK Platform Android 4.3, API 18'");

	let status = session.apply(PlanAction::AcceptFocusedGroup).unwrap();
	assert_eq!(status.message, None);
	assert!(status.can_proceed);
	assert!(status.group_fully_accepted);

	let plan = session.commit().expect("plan should be ready to commit.");
	let accepted: Vec<_> = plan.accepted().into_iter().map(|c| c.id.as_str()).collect();
	assert_eq!(accepted, ["tools", "platform", "x86-image", "docs"]);
	let order: Vec<_> = plan.install_order().unwrap().into_iter().map(|c| c.id.as_str()).collect();
	assert_eq!(order, ["tools", "platform", "x86-image", "docs"]);
}

#[test]
fn rejecting_a_dependency_closes_the_gate() {
	init_logging();
	let mut session = PlanSession::new(CandidateStore::from_json(&options(), SNAPSHOT).unwrap());
	session.apply(PlanAction::AcceptGroup(session.store().group_of(&"tools".into()).unwrap())).unwrap();

	let status = session.select(Focus::Candidate("tools".into())).unwrap();
	assert!(status.can_proceed);

	let status = session.apply(PlanAction::Toggle("tools".into())).unwrap();
	assert_eq!(status.message.unwrap().to_string(), "Package 'SDK Platform Android 4.3, API 18' depends on this one.");
	assert!(!status.can_proceed);
	assert!(!status.group_fully_accepted);

	let session = *session.commit().expect_err("plan should not be ready to commit.");
	session.cancel();
}

#[test]
fn unknown_references_are_errors() {
	init_logging();
	let mut session = PlanSession::new(CandidateStore::from_json(&options(), SNAPSHOT).unwrap());
	let missing: CandidateId = "missing".into();

	assert!(matches!(session.apply(PlanAction::Accept(missing.clone())), Err(install_planner::Error::InvalidReference(_))));
	assert!(matches!(session.select(Focus::Candidate(missing)), Err(install_planner::Error::InvalidReference(_))));
}

#[test]
fn inconsistent_snapshots_are_refused() {
	init_logging();
	let one_sided = r#"{ "candidates": [
		{ "id": "a", "name": "A", "depends_on": ["b"] },
		{ "id": "b", "name": "B" }
	] }"#;
	assert!(matches!(CandidateStore::from_json(&options(), one_sided), Err(install_planner::Error::Validation(_))));

	let dangling = r#"{ "candidates": [ { "id": "a", "name": "A", "depends_on": ["b"] } ] }"#;
	assert!(matches!(CandidateStore::from_json(&options(), dangling), Err(install_planner::Error::InvalidReference(_))));

	let wrong_shape = r#"{ "candidates": [ { "id": "a", "name": 4 } ] }"#;
	assert!(matches!(CandidateStore::from_json(&options(), wrong_shape), Err(install_planner::Error::Validation(_))));
}

#[test]
fn group_focus_does_not_survive_new_candidates() {
	init_logging();
	let mut session = PlanSession::new(CandidateStore::from_json(&options(), SNAPSHOT).unwrap());
	let sdk = session.store().group_of(&"platform".into()).unwrap();
	session.select(Focus::Group(sdk)).unwrap();

	let addon = r#"{
		"licenses": [ { "ref": "oem-android-license", "text": "OEM terms" } ],
		"candidates": [ { "id": "addon", "name": "OEM Add-on", "license": 0 } ]
	}"#;
	let candidates = install_planner::PlanSnapshot::from_json(addon, true).unwrap().into_candidates().unwrap();
	let status = session.replace_candidates(&options(), candidates).unwrap();
	assert_eq!(session.focus(), &Focus::None);
	assert!(!status.group_fully_accepted);

	session.apply(PlanAction::AcceptFocusedGroup).unwrap();
	assert!(!session.store().get(&"addon".into()).unwrap().is_accepted());

	assert!(matches!(session.apply(PlanAction::AcceptGroup(sdk)), Err(install_planner::Error::InvalidReference(_))));
	assert!(!session.store().get(&"addon".into()).unwrap().is_accepted());
}
