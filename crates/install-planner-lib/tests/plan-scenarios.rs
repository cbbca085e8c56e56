use install_planner::planner::*;
use install_planner::Decision;
use install_planner_test_utils::*;

fn init_logging() {
	let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn unlicensed_independent_candidates_can_proceed() {
	init_logging();
	let store = PlanBuilder::new()
		.candidate("a", "Android SDK Tools")
		.candidate("b", "Android SDK Platform-tools")
		.candidate("c", "Documentation for Android SDK")
		.build()
		.expect("failed to build plan.");

	assert!(store.candidates().iter().all(|c| c.decision() == Decision::Accepted));
	assert_eq!(find_blocking_message(&store, None), None);
	assert!(can_proceed(&store, None));
}

#[test]
fn accepted_focus_with_undecided_dependency() {
	init_logging();
	let mut store = PlanBuilder::new()
		.license("sdk", "android-sdk-license", "Terms and conditions")
		.candidate("x", "SDK Platform Android 4.2")
		.candidate("y", "Android SDK Tools, revision 21")
		.licensed("x", "sdk")
		.licensed("y", "sdk")
		.depends("x", "y")
		.build()
		.expect("failed to build plan.");

	store.accept(&"x".into()).unwrap();
	assert_eq!(store.get(&"y".into()).unwrap().decision(), Decision::Undecided);

	let focus = "x".into();
	let message = find_blocking_message(&store, Some(&focus)).expect("plan should be blocked.");
	assert_eq!(message.to_string(), "This package depends on 'Android SDK Tools, revision 21'.");
	assert!(!can_proceed(&store, Some(&focus)));
}

#[test]
fn rejected_focus_required_by_accepted_dependent() {
	init_logging();
	let mut store = PlanBuilder::new()
		.candidate("x", "Google APIs")
		.candidate("y", "SDK Platform")
		.depends("x", "y")
		.build()
		.expect("failed to build plan.");

	store.reject(&"y".into()).unwrap();

	let message = find_blocking_message(&store, Some(&"y".into())).expect("plan should be blocked.");
	assert_eq!(message.to_string(), "Package 'Google APIs' depends on this one.");
	assert!(!can_proceed(&store, Some(&"y".into())));
}

#[test]
fn shared_license_group_tracks_acceptance() {
	init_logging();
	let mut store = PlanBuilder::new()
		.license("oem", "oem-android-license", "")
		.candidate("a", "OEM Add-on A")
		.candidate("b", "OEM Add-on B")
		.licensed("a", "oem")
		.licensed("b", "oem")
		.build()
		.expect("failed to build plan.");

	let group = store.group_of(&"a".into()).unwrap();
	assert_eq!(store.group_of(&"b".into()).unwrap(), group);
	assert!(store.is_group_fully_accepted(group).unwrap());

	store.reject(&"b".into()).unwrap();
	assert!(!store.is_group_fully_accepted(group).unwrap());

	store.accept_group(group).unwrap();
	assert!(store.is_group_fully_accepted(group).unwrap());
}

#[test]
fn shared_license_group_with_text_starts_undecided() {
	init_logging();
	let mut store = PlanBuilder::new()
		.license("oem", "oem-android-license", "OEM terms")
		.candidate("a", "OEM Add-on A")
		.candidate("b", "OEM Add-on B")
		.licensed("a", "oem")
		.licensed("b", "oem")
		.build()
		.expect("failed to build plan.");

	let group = store.group_of(&"a".into()).unwrap();
	assert_eq!(store.group(group).unwrap().name(), "Oem Android License");
	assert!(!store.is_group_fully_accepted(group).unwrap());
	assert!(!can_proceed(&store, None));

	store.accept_group(group).unwrap();
	assert!(store.is_group_fully_accepted(group).unwrap());
	assert!(can_proceed(&store, None));
}

#[test]
fn global_scan_reports_first_candidate_in_collection_order() {
	init_logging();
	let mut store = PlanBuilder::new()
		.license("sdk", "android-sdk-license", "Terms and conditions")
		.candidate("a", "Package A")
		.candidate("c", "Package C")
		.candidate("b", "Package B")
		.licensed("b", "sdk")
		.depends("a", "b")
		.build()
		.expect("failed to build plan.");

	assert!(store.get(&"a".into()).unwrap().is_accepted());
	assert!(store.get(&"c".into()).unwrap().is_accepted());
	assert_eq!(store.get(&"b".into()).unwrap().decision(), Decision::Undecided);

	let message = find_blocking_message(&store, None).expect("plan should be blocked.");
	assert_eq!(message, BlockingMessage::Unmet {
		dependent: "a".into(),
		dependent_name: "Package A".into(),
		dependency: "b".into(),
		dependency_name: "Package B".into(),
	});
	assert_eq!(message.to_string(), "Package 'Package A' depends on 'Package B'");

	/* Looking at the satisfied candidate still surfaces the problem elsewhere */
	assert_eq!(find_blocking_message(&store, Some(&"c".into())), Some(message));

	store.accept(&"b".into()).unwrap();
	assert_eq!(find_blocking_message(&store, None), None);
}

#[test]
fn global_scan_reports_unaccepted_dependency_before_later_dependents() {
	init_logging();
	let mut store = PlanBuilder::new()
		.candidate("first", "First")
		.candidate("dep", "Shared Dependency")
		.candidate("second", "Second")
		.depends("first", "dep")
		.depends("second", "dep")
		.build()
		.expect("failed to build plan.");

	store.reject(&"dep".into()).unwrap();
	store.reject(&"first".into()).unwrap();

	/* Nothing depends on `first`, `dep` is reached next and only `second` still wants it */
	let message = find_blocking_message(&store, None).expect("plan should be blocked.");
	assert_eq!(message.to_string(), "Package 'Second' depends on 'Shared Dependency'");
}

#[test]
fn focused_message_takes_precedence() {
	init_logging();
	let mut store = PlanBuilder::new()
		.candidate("a", "A")
		.candidate("b", "B")
		.candidate("c", "C")
		.candidate("d", "D")
		.depends("a", "b")
		.depends("c", "d")
		.build()
		.expect("failed to build plan.");

	store.reject(&"b".into()).unwrap();
	store.reject(&"d".into()).unwrap();

	assert_eq!(find_blocking_message(&store, None).unwrap().to_string(), "Package 'A' depends on 'B'");
	assert_eq!(find_blocking_message(&store, Some(&"c".into())).unwrap().to_string(), "This package depends on 'D'.");
	assert_eq!(find_blocking_message(&store, Some(&"d".into())).unwrap().to_string(), "Package 'C' depends on this one.");
}
