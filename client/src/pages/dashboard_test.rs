use super::*;

#[test]
fn section_links_skip_the_dashboard() {
    let hrefs: Vec<&str> = section_links().map(|(href, _)| *href).collect();
    assert!(!hrefs.contains(&"/"));
    assert_eq!(hrefs.len(), NAV_LINKS.len() - 1);
    assert_eq!(hrefs.first(), Some(&"/events"));
}

#[test]
fn section_links_cover_every_managed_route() {
    let hrefs: Vec<&str> = section_links().map(|(href, _)| *href).collect();
    for route in ["/speakers", "/pages/about", "/navigation", "/registrations", "/queries"] {
        assert!(hrefs.contains(&route), "missing {route}");
    }
}
