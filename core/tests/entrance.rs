use vitrine_core::{EntrancePlan, PresentationConfig, Section, StaggerProfile};

fn assert_close(actual: f64, expected: f64) {
    let delta = (actual - expected).abs();
    assert!(
        delta <= 1e-9,
        "expected {:.6} got {:.6} (delta {:.6})",
        expected,
        actual,
        delta
    );
}

#[test]
fn cv_delays_step_by_a_tenth() {
    let config = PresentationConfig::default();
    let plan = EntrancePlan::for_section(Section::Cv, 5, &config);
    assert_eq!(plan.len(), 5);
    for (index, step) in plan.steps.iter().enumerate() {
        assert_eq!(step.index, index);
        assert_close(step.delay_s, index as f64 * 0.1);
        assert_close(step.duration_s, 0.6);
        assert_close(step.from_offset_px, 30.0);
    }
    assert_eq!(plan.steps[0].delay_s, 0.0);
}

#[test]
fn letter_delays_step_by_fifteen_hundredths() {
    let config = PresentationConfig::default();
    let plan = EntrancePlan::for_section(Section::Letter, 4, &config);
    let delays: Vec<f64> = plan.steps.iter().map(|step| step.delay_s).collect();
    assert_eq!(delays.len(), 4);
    assert_eq!(delays[0], 0.0);
    assert_close(delays[1], 0.15);
    assert_close(delays[2], 0.30);
    assert_close(delays[3], 0.45);
    assert_close(plan.total_duration_s(), 0.45 + 0.5);
}

#[test]
fn menu_has_no_entrance() {
    let config = PresentationConfig::default();
    assert!(EntrancePlan::for_section(Section::Menu, 3, &config).is_empty());
}

#[test]
fn empty_section_has_empty_plan() {
    let plan = EntrancePlan::new(StaggerProfile::CV, 0);
    assert!(plan.is_empty());
    assert_eq!(plan.total_duration_s(), 0.0);
}

#[test]
fn step_styles_render_hidden_and_settled_states() {
    let plan = EntrancePlan::new(StaggerProfile::LETTER, 3);
    let step = plan.steps[2];
    assert_eq!(step.hidden_transform(), "translateY(20px)");
    assert_eq!(step.settled_transform(), "translateY(0px)");
    assert_eq!(
        step.transition(),
        "opacity 0.5s ease 0.3s, transform 0.5s ease 0.3s"
    );
}
