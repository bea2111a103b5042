//! End-to-end scenarios S1-S6 against the public API.

use search_core::prelude::*;

fn actual(_id: i64, status: DocumentStatus, _rating: i32) -> bool {
    status == DocumentStatus::Actual
}

#[test]
fn s1_stop_word_exclusion() {
    let mut server = SearchServer::new("in the").unwrap();
    server
        .add_document(42, "cat in the city", DocumentStatus::Actual, &[1, 2, 3])
        .unwrap();

    assert!(server.find_top_documents("in", actual).unwrap().is_empty());

    let results = server.find_top_documents("cat", actual).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 42);
    assert_eq!(results[0].rating, 2);
}

#[test]
fn s2_minus_word_filter() {
    let mut server = SearchServer::new::<&str>("").unwrap();
    server
        .add_document(42, "cat in the city", DocumentStatus::Actual, &[1, 2, 3])
        .unwrap();
    server
        .add_document(11, "dog in the city", DocumentStatus::Actual, &[1, 2, 3])
        .unwrap();

    let results = server.find_top_documents("city -cat", actual).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 11);

    assert!(server.find_top_documents("cat -city", actual).unwrap().is_empty());
}

#[test]
fn s3_match_with_minus() {
    let mut server = SearchServer::new::<&str>("").unwrap();
    server.add_document(42, "cat dog", DocumentStatus::Actual, &[1]).unwrap();

    let (words, status) = server.match_document("cat dog", 42).unwrap();
    assert_eq!(words, vec!["cat", "dog"]);
    assert_eq!(status, Some(DocumentStatus::Actual));

    let (words, status) = server.match_document("-cat safari", 42).unwrap();
    assert!(words.is_empty());
    assert_eq!(status, Some(DocumentStatus::Actual));

    let (words, status) = server.match_document("", 42).unwrap();
    assert!(words.is_empty());
    assert_eq!(status, Some(DocumentStatus::Actual));
}

#[test]
fn s4_tf_idf_ranking() {
    let mut server = SearchServer::new::<&str>("").unwrap();
    server
        .add_document(11, "cat dog mouse", DocumentStatus::Actual, &[1, 1, 1])
        .unwrap();
    server
        .add_document(22, "cat dog", DocumentStatus::Actual, &[2, 2, 2])
        .unwrap();
    server.add_document(33, "cat", DocumentStatus::Actual, &[3, 3, 3]).unwrap();

    let results = server.find_top_documents("cat", actual).unwrap();
    let ids: Vec<i64> = results.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![33, 22, 11]);
    for r in &results {
        assert!(r.relevance.abs() < RELEVANCE_EPSILON, "idf of a term in every doc is 0");
    }
}

#[test]
fn s5_duplicate_detection() {
    let mut server = SearchServer::new::<&str>("").unwrap();
    server.add_document(1, "a b c", DocumentStatus::Actual, &[1]).unwrap();
    server.add_document(2, "c a b", DocumentStatus::Actual, &[1]).unwrap();
    server.add_document(3, "a b", DocumentStatus::Actual, &[1]).unwrap();

    remove_duplicates(&mut server);

    assert_eq!(server.iterate_ids().collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn s6_sliding_window() {
    let mut server = SearchServer::new("and in at").unwrap();
    server
        .add_document(1, "curly cat curly tail", DocumentStatus::Actual, &[7, 2, 7])
        .unwrap();
    server
        .add_document(2, "curly dog and fancy collar", DocumentStatus::Actual, &[1, 2, 3])
        .unwrap();
    server
        .add_document(3, "big cat fancy collar", DocumentStatus::Actual, &[1, 2, 8])
        .unwrap();
    server
        .add_document(4, "big dog sparrow Eugene", DocumentStatus::Actual, &[1, 3, 2])
        .unwrap();
    server
        .add_document(5, "big dog sparrow Vasiliy", DocumentStatus::Actual, &[1, 1, 1])
        .unwrap();

    let mut queue = RequestQueue::new(&server);

    for _ in 0..1439 {
        queue.add_find_request_actual("empty request").unwrap();
    }
    assert_eq!(queue.no_result_count(), 1439);

    queue.add_find_request_actual("curly dog").unwrap();
    assert_eq!(queue.no_result_count(), 1439);

    queue.add_find_request_actual("big collar").unwrap();
    assert_eq!(queue.no_result_count(), 1438);

    queue.add_find_request_actual("sparrow").unwrap();
    assert_eq!(queue.no_result_count(), 1437);
}
