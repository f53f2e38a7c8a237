mod common;
use common::{console_output, sample_records, scripted_console, setup_data_file, write_sample_data};
use prodtracker::core::{Menu, MenuChoice, MenuState};
use prodtracker::store::RecordStore;
use std::fs;

#[test]
fn test_menu_choice_parsing_is_exact() {
    assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
    assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::Report));
    assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Display));
    assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
    assert_eq!(MenuChoice::parse(" 1"), None);
    assert_eq!(MenuChoice::parse("5"), None);
    assert_eq!(MenuChoice::parse(""), None);
}

#[test]
fn test_menu_loads_once_and_exits() {
    let path = setup_data_file("menu_exit");
    write_sample_data(&path);
    let store = RecordStore::new(&path);

    let mut menu = Menu::open(&store, "-").expect("open");
    assert_eq!(menu.records(), sample_records().as_slice());
    assert_eq!(menu.state(), MenuState::Running);

    let mut console = scripted_console("4\n");
    menu.run(&mut console).expect("run");

    assert_eq!(menu.state(), MenuState::Exiting);
    let text = console_output(console);
    assert!(text.contains("1. Add Shift Output"));
    assert!(text.contains("4. Exit"));
    assert!(text.contains("Exiting system..."));
}

#[test]
fn test_menu_rejects_unknown_choices_and_reprompts() {
    let path = setup_data_file("menu_invalid");
    let store = RecordStore::new(&path);
    let mut menu = Menu::open(&store, "-").expect("open");

    let mut console = scripted_console("9\n 1\nexit\n4\n");
    menu.run(&mut console).expect("run");

    let text = console_output(console);
    assert_eq!(text.matches("Invalid choice. Please try again.").count(), 3);
    assert_eq!(text.matches("Enter your choice: ").count(), 4);
    assert!(menu.records().is_empty());
    assert!(!std::path::Path::new(&path).exists());
}

#[test]
fn test_menu_ends_on_closed_input() {
    let path = setup_data_file("menu_eof");
    let store = RecordStore::new(&path);
    let mut menu = Menu::open(&store, "-").expect("open");

    let mut console = scripted_console("3\n");
    menu.run(&mut console).expect("run");

    assert_eq!(menu.state(), MenuState::Exiting);
    let text = console_output(console);
    assert!(text.contains("No production records available."));
    assert!(text.contains("Exiting system..."));
}

#[test]
fn test_menu_add_then_report_same_session() {
    let path = setup_data_file("menu_add_report");
    write_sample_data(&path);
    let store = RecordStore::new(&path);
    let mut menu = Menu::open(&store, "-").expect("open");

    let mut console = scripted_console("1\nNight\n70\n60\ny\n3\n4\n");
    menu.run(&mut console).expect("run");

    assert_eq!(menu.records().len(), 4);
    assert_eq!(menu.records()[3].shift, "Night");

    let reloaded = store.load().expect("reload");
    assert_eq!(reloaded, menu.records());

    let text = console_output(console);
    assert!(text.contains("Production data saved successfully."));
    assert!(text.contains("All Production Records"));
}

#[test]
fn test_menu_report_and_display_leave_file_untouched() {
    let path = setup_data_file("menu_read_only");
    write_sample_data(&path);
    let before = fs::read(&path).expect("read");
    let store = RecordStore::new(&path);
    let mut menu = Menu::open(&store, "-").expect("open");

    let mut console = scripted_console("2\n2025-09-01\n2\n2030-01-01\n3\n4\n");
    menu.run(&mut console).expect("run");

    assert_eq!(menu.records(), sample_records().as_slice());
    assert_eq!(fs::read(&path).expect("read"), before);

    let text = console_output(console);
    assert!(text.contains("Total"));
    assert!(text.contains("No production data found for this date."));
}

#[test]
fn test_menu_aborted_entry_keeps_running() {
    let path = setup_data_file("menu_abort");
    let store = RecordStore::new(&path);
    let mut menu = Menu::open(&store, "-").expect("open");

    let mut console = scripted_console("1\nMorning\nabc\n4\n");
    menu.run(&mut console).expect("run");

    assert!(menu.records().is_empty());
    assert!(!std::path::Path::new(&path).exists());
    let text = console_output(console);
    assert!(text.contains("Invalid input! Units and Target must be numbers."));
    assert!(text.contains("Exiting system..."));
}
