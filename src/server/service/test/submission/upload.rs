use super::*;

/// Tests an enrolled student's file is written and recorded.
///
/// Verifies the file lands under `<classroom>/<student>/` in the upload
/// directory with the uploaded contents.
///
/// Expected: Ok(StudentFile)
#[tokio::test]
async fn stores_file_for_enrolled_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let upload_dir = tempfile::tempdir()?;

    let (_, classroom) = factory::helpers::create_classroom_with_instructor(db).await?;
    let student = factory::create_student(db).await?;
    factory::create_enrollment(db, classroom.id, student.id).await?;

    let file = SubmissionService::new(db, upload_dir.path())
        .upload(upload_params(student.id, classroom.id, "Essay Final.PDF"))
        .await?;

    assert_eq!(file.file_name, "Essay_Final.PDF");

    let expected_dir = upload_dir
        .path()
        .join(classroom.id.to_string())
        .join(student.id.to_string());
    assert!(std::path::Path::new(&file.file_path).starts_with(&expected_dir));
    assert_eq!(tokio::fs::read(&file.file_path).await?, b"homework");

    Ok(())
}

/// Tests files with other extensions are refused before anything is written.
///
/// Expected: Err(BadRequest) and an empty upload directory
#[tokio::test]
async fn rejects_unsupported_extension() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let upload_dir = tempfile::tempdir()?;

    let (_, classroom) = factory::helpers::create_classroom_with_instructor(db).await?;
    let student = factory::create_student(db).await?;
    factory::create_enrollment(db, classroom.id, student.id).await?;

    let service = SubmissionService::new(db, upload_dir.path());
    for name in ["script.exe", "archive.pdf.zip", "noextension"] {
        let result = service
            .upload(upload_params(student.id, classroom.id, name))
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))), "{}", name);
    }

    assert!(std::fs::read_dir(upload_dir.path())?.next().is_none());

    Ok(())
}

/// Tests a student must be enrolled to submit.
///
/// Expected: Err(NotFound("You are not enrolled in this class!"))
#[tokio::test]
async fn rejects_student_not_enrolled() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let upload_dir = tempfile::tempdir()?;

    let (_, classroom) = factory::helpers::create_classroom_with_instructor(db).await?;
    let student = factory::create_student(db).await?;

    let result = SubmissionService::new(db, upload_dir.path())
        .upload(upload_params(student.id, classroom.id, "essay.txt"))
        .await;

    match result {
        Err(AppError::NotFound(message)) => {
            assert_eq!(message, "You are not enrolled in this class!")
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }

    Ok(())
}
