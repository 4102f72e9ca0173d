use defaults_core::ExitStatus;

#[test]
fn codes_follow_severity() {
    assert_eq!(ExitStatus::Clean.code(), 0);
    assert_eq!(ExitStatus::Warned.code(), 1);
    assert_eq!(ExitStatus::ConversionFailed.code(), 2);
    assert_eq!(ExitStatus::Failed.code(), 3);
    assert!(ExitStatus::Failed > ExitStatus::ConversionFailed);
    assert!(ExitStatus::ConversionFailed > ExitStatus::Warned);
}

#[test]
fn failure_outranks_warning() {
    assert_eq!(
        ExitStatus::for_completed_run(true, true),
        ExitStatus::ConversionFailed
    );
    assert_eq!(ExitStatus::for_completed_run(false, true), ExitStatus::Warned);
    assert_eq!(ExitStatus::for_completed_run(false, false), ExitStatus::Clean);
}

#[test]
fn epilog_lists_all_codes() {
    let text = ExitStatus::describe_all();
    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("3: failed completely"));
}
