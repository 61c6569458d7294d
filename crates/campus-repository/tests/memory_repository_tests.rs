//! Integration tests for MemoryRepository through the trait objects

use std::sync::Arc;

use campus_core::validation::validate_student_id;
use campus_core::{Course, CourseId, CoursePatch};
use campus_repository::{MemoryRepository, Registry, RepositoryError, SeedData};

fn registry() -> Arc<dyn Registry> {
    Arc::new(MemoryRepository::from_seed(SeedData::builtin()).unwrap())
}

#[tokio::test]
async fn test_get_student_by_id() {
    let repo = registry();
    let id = validate_student_id("670610722").unwrap();

    let student = repo.get_student(&id).await.unwrap();
    assert_eq!(student.first_name, "Bhumiphat");
    assert_eq!(student.section, "001");
}

#[tokio::test]
async fn test_get_unknown_student() {
    let repo = registry();
    let id = validate_student_id("650619999").unwrap();

    let err = repo.get_student(&id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::StudentNotFound { .. }));
}

#[tokio::test]
async fn test_student_courses_resolve_in_order() {
    let repo = registry();
    let id = validate_student_id("650610002").unwrap();
    let student = repo.get_student(&id).await.unwrap();

    let courses = repo.find_courses(&student.courses).await.unwrap();
    let ids: Vec<Option<i64>> = courses
        .iter()
        .map(|c| c.as_ref().map(|c| c.course_id.get()))
        .collect();
    assert_eq!(ids, vec![Some(261207), Some(261497), Some(269101)]);
}

#[tokio::test]
async fn test_deleted_course_leaves_dangling_reference() {
    let repo = registry();
    repo.delete_course(CourseId::new(261497)).await.unwrap();

    let id = validate_student_id("650610003").unwrap();
    let student = repo.get_student(&id).await.unwrap();
    assert_eq!(student.courses, vec![CourseId::new(261497)]);

    let courses = repo.find_courses(&student.courses).await.unwrap();
    assert_eq!(courses, vec![None]);
}

#[tokio::test]
async fn test_create_then_get() {
    let repo = registry();
    let course = Course::new(261999, "Special Topics", vec!["Guest".to_string()]);

    let created = repo.insert_course(course.clone()).await.unwrap();
    assert_eq!(created, course);
    assert_eq!(repo.get_course(CourseId::new(261999)).await.unwrap(), course);
}

#[tokio::test]
async fn test_update_merges_present_fields_only() {
    let repo = registry();
    let before = repo.get_course(CourseId::new(261207)).await.unwrap();

    let updated = repo
        .update_course(CoursePatch::new(261207).with_title("Renamed Lab"))
        .await
        .unwrap();

    assert_eq!(updated.course_title, "Renamed Lab");
    assert_eq!(updated.instructors, before.instructors);
    assert_eq!(repo.get_course(CourseId::new(261207)).await.unwrap(), updated);
}

#[tokio::test]
async fn test_update_with_empty_patch_is_noop() {
    let repo = registry();
    let before = repo.get_course(CourseId::new(269101)).await.unwrap();

    let after = repo.update_course(CoursePatch::new(269101)).await.unwrap();
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_concurrent_delete_only_one_succeeds() {
    let repo = registry();
    let mut handles = Vec::new();
    for _ in 0..4 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.delete_course(CourseId::new(269101)).await
        }));
    }

    let mut deleted = 0;
    let mut not_found = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => deleted += 1,
            Err(e) if e.is_not_found() => not_found += 1,
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    assert_eq!(deleted, 1);
    assert_eq!(not_found, 3);
    assert_eq!(repo.list_courses().await.unwrap().len(), 2);
}
