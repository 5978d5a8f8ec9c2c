use super::*;

#[test]
fn plan_links_depend_on_sign_in() {
    assert_eq!(plan_href(Plan::Premium, true), "/dashboard/checkout?plan=premium");
    assert_eq!(plan_href(Plan::Pro, false), "/auth/signup?plan=pro");
}
