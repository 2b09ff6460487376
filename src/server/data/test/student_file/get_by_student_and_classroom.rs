use super::*;

/// Tests only the student's files for the given classroom are returned.
///
/// Expected: Ok with the matching files oldest first
#[tokio::test]
async fn filters_by_student_and_classroom() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, classroom) = factory::helpers::create_classroom_with_instructor(db).await?;
    let (_, other_classroom) = factory::helpers::create_classroom_with_instructor(db).await?;
    let student = factory::create_student(db).await?;
    let other_student = factory::create_student(db).await?;

    let repo = StudentFileRepository::new(db);
    for (student_id, classroom_id, name) in [
        (student.id, classroom.id, "essay.pdf"),
        (student.id, classroom.id, "notes.txt"),
        (student.id, other_classroom.id, "elsewhere.pdf"),
        (other_student.id, classroom.id, "someone-else.docx"),
    ] {
        repo.create(CreateStudentFileParams {
            student_id,
            classroom_id,
            file_name: name.to_string(),
            file_path: format!("/uploads/{}/{}/{}", classroom_id, student_id, name),
        })
        .await?;
    }

    let files = repo
        .get_by_student_and_classroom(student.id, classroom.id)
        .await?;

    let names: Vec<_> = files.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(names, vec!["essay.pdf", "notes.txt"]);
    assert!(files.iter().all(|f| f.student_id == student.id));

    Ok(())
}
