use lmrank::stats::FIELD_BODY;
use lmrank::{FeatureExtractors, LmConfig, MemoryIndex, RecordingSink, RerankContext};
use std::sync::Arc;
use std::thread;

fn corpus() -> MemoryIndex {
    let mut idx = MemoryIndex::new();
    for id in 0..64u64 {
        let mut tokens = vec!["common".to_string(); (id % 7 + 1) as usize];
        tokens.push(format!("rare{}", id % 5));
        if id % 3 == 0 {
            tokens.push("query".to_string());
        }
        idx.add_document(FIELD_BODY, id, tokens);
    }
    idx
}

#[test]
fn test_threads_share_one_context() {
    let idx = Arc::new(corpus());
    let sink = RecordingSink::new();
    let ctx = Arc::new(RerankContext::new(
        idx.as_ref(),
        FIELD_BODY,
        ["query", "common", "rare3"],
        &sink,
    ));
    let chain = Arc::new(
        FeatureExtractors::language_models(&LmConfig::default(), Arc::new(RecordingSink::new()))
            .unwrap(),
    );

    let expected: Vec<Vec<u64>> = (0..64u64)
        .map(|id| {
            let doc = idx.document_terms(FIELD_BODY, id).unwrap();
            chain
                .extract_all(doc, &ctx)
                .values
                .iter()
                .map(|v| v.to_bits())
                .collect()
        })
        .collect();

    let handles: Vec<_> = (0..8u64)
        .map(|worker| {
            let idx = idx.clone();
            let ctx = ctx.clone();
            let chain = chain.clone();
            thread::spawn(move || {
                (0..64u64)
                    .filter(|id| id % 8 == worker)
                    .map(|id| {
                        let doc = idx.document_terms(FIELD_BODY, id).unwrap();
                        let bits: Vec<u64> = chain
                            .extract_all(doc, &ctx)
                            .values
                            .iter()
                            .map(|v| v.to_bits())
                            .collect();
                        (id, bits)
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for h in handles {
        for (id, bits) in h.join().unwrap() {
            assert_eq!(bits, expected[id as usize], "doc {}", id);
        }
    }
}

#[test]
fn test_batch_extraction_preserves_order() {
    let idx = corpus();
    let sink = RecordingSink::new();
    let ctx = RerankContext::new(&idx, FIELD_BODY, ["query"], &sink);
    let chain =
        FeatureExtractors::language_models(&LmConfig::default(), Arc::new(RecordingSink::new()))
            .unwrap();

    let docs: Vec<_> = (0..64u64)
        .map(|id| idx.document_terms(FIELD_BODY, id).unwrap().clone())
        .collect();
    let batch = chain.extract_batch(&docs, &ctx);

    assert_eq!(batch.len(), 64);
    for (id, fv) in batch.iter().enumerate() {
        assert_eq!(fv, &chain.extract_all(&docs[id], &ctx));
    }
}
