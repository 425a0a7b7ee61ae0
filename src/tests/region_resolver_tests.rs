use std::sync::Arc;

use super::{fake_plan::FakePlan, init_logging, region_code::RegionCode};
use crate::i18n::RegionResolver;

fn get_resolver() -> RegionResolver<FakePlan> {
    init_logging();
    RegionResolver::new(FakePlan::default())
}

#[test]
fn dialing_code_for_known_regions() {
    let resolver = get_resolver();
    assert_eq!(resolver.dialing_code(RegionCode::ae()), Some(971));
    assert_eq!(resolver.dialing_code(RegionCode::pk()), Some(92));
    assert_eq!(resolver.dialing_code(RegionCode::sa()), Some(966));
    assert_eq!(resolver.dialing_code(RegionCode::jo()), Some(962));
}

#[test]
fn dialing_code_ignores_case_and_padding() {
    let resolver = get_resolver();
    assert_eq!(resolver.dialing_code("ae"), Some(971));
    assert_eq!(resolver.dialing_code(" Jo "), Some(962));
}

#[test]
fn no_dialing_code_for_unknown_regions() {
    let resolver = get_resolver();
    assert_eq!(resolver.dialing_code(RegionCode::zz()), None);
    assert_eq!(resolver.dialing_code("XX"), None);
    assert_eq!(resolver.dialing_code(""), None);
    assert_eq!(resolver.dialing_code("UAE"), None);
    // A zero code is no code.
    assert_eq!(resolver.dialing_code(RegionCode::xz()), None);
}

#[test]
fn dialing_prefix() {
    let resolver = get_resolver();
    assert_eq!(resolver.dialing_prefix(RegionCode::ae()).as_deref(), Some("+971"));
    assert_eq!(resolver.dialing_prefix(RegionCode::pk()).as_deref(), Some("+92"));
    assert_eq!(resolver.dialing_prefix("sa").as_deref(), Some("+966"));
    assert_eq!(resolver.dialing_prefix(RegionCode::zz()), None);
    assert_eq!(resolver.dialing_prefix(RegionCode::xz()), None);
}

#[test]
fn dialing_prefix_is_memoized() {
    let resolver = get_resolver();
    let first = resolver.dialing_prefix(RegionCode::jo()).unwrap();
    let second = resolver.dialing_prefix("jo").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    // Unknown regions are remembered too and stay unknown.
    assert_eq!(resolver.dialing_prefix("XX"), None);
    assert_eq!(resolver.dialing_prefix("XX"), None);
}
