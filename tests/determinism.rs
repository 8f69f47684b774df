use std::collections::HashSet;

use blake3::hash;
use section_bf::{SearchConfig, SectionSearch, WriterSink};

#[test]
fn section_search_output_is_deterministic() {
    let mut fingerprints = HashSet::new();
    for _ in 0..3 {
        let search = SectionSearch::new(SearchConfig::new(7, 2).with_leading_coeff(2))
            .expect("valid configuration");
        let mut sink = WriterSink::new(Vec::new());
        search.run(&mut sink).expect("search succeeds");
        fingerprints.insert(hash(&sink.into_inner()));
    }

    assert_eq!(fingerprints.len(), 1, "outputs diverged across runs");
}
