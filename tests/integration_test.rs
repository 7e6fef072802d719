// Integration tests for campdex
use campdex::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn seeded_catalog() -> MemoryCatalog {
    MemoryCatalog::new(vec![
        ExistingEntry::new("camp-001", "Sunset Camping Ground", "123 Mountain Road, Chiang Mai")
            .with_coordinates(18.7883, 98.9853)
            .with_phone("0812345678"),
        ExistingEntry::new("camp-002", "Beach Camp", "9 Shore Lane, Rayong")
            .with_coordinates(12.6814, 101.2816)
            .with_website("https://www.beachcamp.com"),
        ExistingEntry::new("camp-003", "Pine Hill Resort", "77 Forest Way, Pai")
            .with_coordinates(19.3584, 98.4408),
    ])
}

#[test]
fn test_distance_bangkok_to_chiang_mai() {
    let dist = haversine_km(13.7563, 100.5018, 18.7883, 98.9853);
    assert!(
        (580.0..=620.0).contains(&dist),
        "Expected ~600 km, got {}",
        dist
    );
    assert_eq!(dist, haversine_km(18.7883, 98.9853, 13.7563, 100.5018));
}

#[test]
fn test_identical_listing_is_detected_as_duplicate() {
    let catalog = seeded_catalog();
    let candidate = Candidate::new("Sunset Camping Ground", "123 Mountain Road, Chiang Mai")
        .with_coordinates(18.7883, 98.9853);

    let matcher = DuplicateMatcher::default();
    let verdict = matcher.detect(&catalog, &candidate).unwrap();

    assert!(verdict.is_duplicate);
    assert!(verdict.similarity_score > 0.8);
    assert_eq!(verdict.duplicate_of, Some(EntryId::from("camp-001")));
}

#[test]
fn test_phone_number_formats_match_through_pipeline() {
    let catalog = seeded_catalog();
    let candidate = Candidate::new("Totally New Name", "Unknown Address").with_phone("081-234-5678");

    let matcher = DuplicateMatcher::default();
    let verdict = matcher.detect(&catalog, &candidate).unwrap();

    assert!(verdict.is_duplicate);
    assert_eq!(verdict.similarity_score, 1.0);
    assert_eq!(verdict.duplicate_of, Some(EntryId::from("camp-001")));
}

#[test]
fn test_website_variants_match_through_pipeline() {
    let catalog = seeded_catalog();
    let candidate = Candidate::new("Totally New Name", "Unknown Address").with_website("http://beachcamp.com");

    let matcher = DuplicateMatcher::default();
    let verdict = matcher.detect(&catalog, &candidate).unwrap();

    assert!(verdict.is_duplicate);
    assert_eq!(verdict.similarity_score, 1.0);
    assert_eq!(verdict.duplicate_of, Some(EntryId::from("camp-002")));
}

#[test]
fn test_unknown_listing_gets_clean_empty_verdict() {
    let catalog = seeded_catalog();
    let candidate = Candidate::new("Moonrise Glamping", "1 Crater Rim, Khao Yai");

    let matcher = DuplicateMatcher::default();
    let verdict = matcher.detect(&catalog, &candidate).unwrap();

    assert!(!verdict.is_duplicate);
    assert!(verdict.candidates.is_empty());
    assert!(verdict.duplicate_of.is_none());
}

#[test]
fn test_full_assessment_of_a_duplicate() {
    let catalog = seeded_catalog();
    let candidate = Candidate::new("Sunset Camping Ground", "123 Mountain Road, Chiang Mai")
        .with_phone("0812345678")
        .with_rating(4.6);

    let matcher = DuplicateMatcher::default();
    let blender = ConfidenceBlender::default();
    let classification = TypeClassification {
        label: "tent".to_string(),
        confidence: 0.8,
    };

    let assessment =
        assess_candidate(&matcher, &blender, &catalog, &candidate, Some(&classification)).unwrap();

    assert!(assessment.verdict.is_duplicate);
    assert!(assessment.confidence.overall_score >= 0.9);
    // Website is the only missing expected field
    assert_eq!(assessment.confidence.warnings, vec!["Missing website"]);

    let stats = MatchStats::compute(&assessment.verdict);
    assert!(stats.candidates_count >= 1);
    assert_eq!(stats.best_score, assessment.verdict.similarity_score);
}

#[test]
fn test_incomplete_candidate_collects_all_warnings() {
    let catalog = seeded_catalog();
    let candidate = Candidate::new("Moonrise Glamping", "1 Crater Rim, Khao Yai");

    let matcher = DuplicateMatcher::default();
    let blender = ConfidenceBlender::default();
    let assessment = assess_candidate(&matcher, &blender, &catalog, &candidate, None).unwrap();

    assert_eq!(
        assessment.confidence.warnings,
        vec!["Missing phone number", "Missing website", "Low or missing rating"]
    );
    assert!(assessment.confidence.overall_score >= 0.0);
}

#[test]
fn test_verdict_serializes_as_plain_data() {
    let catalog = seeded_catalog();
    let candidate = Candidate::new("Sunset Camping Ground", "123 Mountain Road, Chiang Mai");

    let matcher = DuplicateMatcher::default();
    let verdict = matcher.detect(&catalog, &candidate).unwrap();
    let json = serde_json::to_value(&verdict).unwrap();

    assert_eq!(json["is_duplicate"], true);
    assert_eq!(json["duplicate_of"], "camp-001");
    assert!(json["candidates"].as_array().unwrap().len() >= 1);
}

#[test]
fn test_randomized_inputs_keep_scores_in_unit_interval() {
    let mut rng = StdRng::seed_from_u64(42);
    let tokens = [
        "sunset", "camp", "ground", "beach", "pine", "hill", "resort", "river", "view", "valley",
    ];

    let matcher = DuplicateMatcher::default();
    let blender = ConfidenceBlender::default();

    for _ in 0..200 {
        let pick = |rng: &mut StdRng| {
            let count = rng.random_range(1..=3);
            (0..count)
                .map(|_| tokens[rng.random_range(0..tokens.len())])
                .collect::<Vec<_>>()
                .join(" ")
        };

        let mut catalog = MemoryCatalog::default();
        for id in 0..rng.random_range(0..5u64) {
            let mut entry = ExistingEntry::new(id, pick(&mut rng), pick(&mut rng));
            if rng.random_bool(0.5) {
                entry = entry.with_coordinates(
                    rng.random_range(-90.0..90.0),
                    rng.random_range(-180.0..180.0),
                );
            }
            if rng.random_bool(0.3) {
                entry = entry.with_phone("0812345678");
            }
            catalog.push(entry);
        }

        let mut candidate = Candidate::new(pick(&mut rng), pick(&mut rng));
        if rng.random_bool(0.5) {
            candidate = candidate.with_coordinates(
                rng.random_range(-90.0..90.0),
                rng.random_range(-180.0..180.0),
            );
        }
        if rng.random_bool(0.3) {
            candidate = candidate.with_phone("081-234-5678");
        }
        if rng.random_bool(0.3) {
            candidate = candidate.with_rating(rng.random_range(0.0..5.0));
        }

        let verdict = matcher.detect(&catalog, &candidate).unwrap();
        assert!((0.0..=1.0).contains(&verdict.similarity_score));
        for result in &verdict.candidates {
            assert!((0.0..=1.0).contains(&result.score));
        }
        assert_eq!(
            verdict.is_duplicate,
            !verdict.candidates.is_empty() && verdict.similarity_score > 0.8
        );

        let classification = rng.random_bool(0.5).then(|| TypeClassification {
            label: "tent".to_string(),
            confidence: rng.random_range(0.0..1.0),
        });
        let confidence = blender.blend(&candidate, &verdict, classification.as_ref());
        assert!(
            (0.0..=1.0).contains(&confidence.overall_score),
            "Confidence must stay clamped, got {}",
            confidence.overall_score
        );
        if verdict.is_duplicate {
            assert!(confidence.overall_score >= 0.9);
        }
    }
}
