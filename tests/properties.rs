use motifscan::detect::Scanner;
use motifscan::{candidates_for_site, gc_content, normalize, scan, MotifKind};
use proptest::prelude::*;

proptest! {
    #[test]
    fn gc_is_a_percentage(s in "[ACGT]{1,200}") {
        let gc = gc_content(s.as_bytes()).unwrap();
        prop_assert!((0.0..=100.0).contains(&gc));
    }

    #[test]
    fn gc_extremes(gc_only in "[GC]{1,80}", at_only in "[AT]{1,80}") {
        prop_assert_eq!(gc_content(gc_only.as_bytes()).unwrap(), 100.0);
        prop_assert_eq!(gc_content(at_only.as_bytes()).unwrap(), 0.0);
    }

    #[test]
    fn normalize_is_idempotent(s in "[ \t\"']{0,3}[ACGTacgt \n]{1,60}[ \"']{0,3}") {
        if let Ok(once) = normalize(&s) {
            let twice = normalize(once.as_str()).unwrap();
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn scan_is_sorted_by_position(s in "[ACGT]{1,150}") {
        let seq = normalize(&s).unwrap();
        let sites = Scanner::with_kinds(&MotifKind::ALL).scan(&seq);
        prop_assert!(sites.windows(2).all(|w| w[0].position <= w[1].position));
        for site in &sites {
            prop_assert_eq!(&s[site.position..site.end()], site.matched.as_str());
        }
    }

    #[test]
    fn guides_cover_their_site(s in "[ACGT]{20,120}", radius in 0usize..50) {
        let seq = normalize(&s).unwrap();
        for site in scan(&seq) {
            for c in candidates_for_site(&seq, &site, radius) {
                prop_assert!(c.pam_position >= 20);
                prop_assert!(c.guide_start() <= site.position && site.position < c.pam_position);
                prop_assert_eq!(&s[c.guide_start()..c.pam_position], c.guide.as_str());
                prop_assert!(c.pam.ends_with("GG"));
                prop_assert!((0.0..=100.0).contains(&c.gc_content));
            }
        }
    }

    #[test]
    fn no_pam_no_guides(s in "[ACT]{1,100}") {
        let seq = normalize(&s).unwrap();
        for site in scan(&seq) {
            prop_assert!(candidates_for_site(&seq, &site, 30).is_empty());
        }
    }
}
