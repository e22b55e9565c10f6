use super::*;

fn job() -> EncodeJob {
    EncodeJob {
        frames_dir: PathBuf::from("frames"),
        pattern: "frame%02d.png".to_owned(),
        width: 640,
        height: 360,
        fps: 30.0,
        frame_count: 90,
        bitrate_mbps: 8,
        out_path: PathBuf::from("out/video.mp4"),
        overwrite: true,
    }
}

fn args(cmd: &Command) -> Vec<String> {
    cmd.get_args()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn command_lists_input_pattern_and_output_settings() {
    let cmd = FfmpegEncoder::default().command(&job());
    assert_eq!(cmd.get_program(), "ffmpeg");
    let input = Path::new("frames").join("frame%02d.png");
    assert_eq!(
        args(&cmd),
        vec![
            "-y".to_owned(),
            "-loglevel".into(),
            "error".into(),
            "-framerate".into(),
            "30".into(),
            "-i".into(),
            input.to_string_lossy().into_owned(),
            "-frames:v".into(),
            "90".into(),
            "-s".into(),
            "640x360".into(),
            "-c:v".into(),
            "libx264".into(),
            "-pix_fmt".into(),
            "yuv420p".into(),
            "-b:v".into(),
            "8M".into(),
            "-movflags".into(),
            "+faststart".into(),
            Path::new("out/video.mp4").to_string_lossy().into_owned(),
        ]
    );
}

#[test]
fn no_overwrite_uses_dash_n() {
    let mut j = job();
    j.overwrite = false;
    let a = args(&FfmpegEncoder::new("/opt/ffmpeg").command(&j));
    assert_eq!(a[0], "-n");
}

#[test]
fn fractional_fps_is_passed_through() {
    let mut j = job();
    j.fps = 29.97;
    let a = args(&FfmpegEncoder::default().command(&j));
    assert_eq!(a[4], "29.97");
}

#[test]
fn validate_rejects_odd_dimensions_and_empty_jobs() {
    let mut j = job();
    j.width = 641;
    assert!(j.validate().unwrap_err().to_string().contains("even"));
    let mut j = job();
    j.frame_count = 0;
    assert!(j.validate().is_err());
    let mut j = job();
    j.bitrate_mbps = 0;
    assert!(j.validate().is_err());
    assert!(job().validate().is_ok());
}

#[test]
fn failing_program_reports_encode_failed() {
    // `false` exits non-zero for any arguments on unix.
    if !cfg!(unix) {
        return;
    }
    let dir = std::env::temp_dir().join(format!("shapereel_encode_fail_{}", std::process::id()));
    let mut j = job();
    j.out_path = dir.join("out.mp4");
    let err = FfmpegEncoder::new("false").encode_frames(&j).unwrap_err();
    match err {
        ReelError::EncodeFailed { exit_code, .. } => assert_eq!(exit_code, Some(1)),
        other => panic!("unexpected error: {other}"),
    }
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_program_fails_to_spawn() {
    let dir = std::env::temp_dir().join(format!("shapereel_encode_missing_{}", std::process::id()));
    let mut j = job();
    j.out_path = dir.join("out.mp4");
    let err = FfmpegEncoder::new("shapereel-no-such-encoder")
        .encode_frames(&j)
        .unwrap_err();
    assert!(matches!(err, ReelError::EncodeFailed { exit_code: None, .. }));
    assert!(err.to_string().contains("failed to spawn"));
    let _ = std::fs::remove_dir_all(&dir);
}
