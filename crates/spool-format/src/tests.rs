use crate::command_file::{CommandFile, Send};

#[test]
fn scenario_s1_local_to_remote_copy_no_spool_copy() {
    let mut cf = CommandFile::new();
    cf.push_send(Send {
        zfrom: "/home/u/a".to_string(),
        zto: "/tmp/a".to_string(),
        zuser: "u".to_string(),
        opts: "c".to_string(),
        ztemp: "D.0".to_string(),
        mode: 0o666,
        znotify: String::new(),
    });

    assert_eq!(cf.render(), "S /home/u/a /tmp/a u c D.0 0666 \"\"\n");
}

#[test]
fn scenario_s2_local_to_remote_with_forced_copy() {
    let mut cf = CommandFile::new();
    cf.push_send(Send {
        zfrom: "/home/u/a".to_string(),
        zto: "D.hostd0001".to_string(),
        zuser: "u".to_string(),
        opts: "C".to_string(),
        ztemp: "D.hostd0001".to_string(),
        mode: 0o666,
        znotify: String::new(),
    });

    assert_eq!(
        cf.render(),
        "S /home/u/a D.hostd0001 u C D.hostd0001 0666 \"\"\n"
    );
}
