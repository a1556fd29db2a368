use std::fs;
use std::path::Path;

use m3u_indexer::config::Config;
use m3u_indexer::errors::{AppError, ParseError};
use m3u_indexer::models::create_channel;
use m3u_indexer::playlist::parse_playlist;
use tempfile::TempDir;

fn write(base: &Path, relative: &str, content: &str) {
    let path = base.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read(base: &Path, relative: &str) -> String {
    fs::read_to_string(base.join(relative))
        .unwrap_or_else(|e| panic!("reading {relative}: {e}"))
}

fn config_for(dir: &TempDir) -> Config {
    Config {
        base_dir: dir.path().to_path_buf(),
        ..Default::default()
    }
}

/// Two country playlists referenced from `index/index.m3u`
fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "index/index.m3u",
        "#EXTM3U\n#EXTINF:-1,United States\nchannels/us.m3u\n#EXTINF:-1,Germany\nchannels/de.m3u\n",
    );
    write(
        dir.path(),
        "channels/us.m3u",
        r#"#EXTM3U x-tvg-url="http://epg.example/us.xml"
#EXTINF:-1 tvg-id="cnn.us" tvg-logo="http://logos/cnn.png" group-title="News",CNN
http://streams/cnn.m3u8
#EXTINF:-1 tvg-language="English;Spanish" group-title="Kids",Cartoon Hour
http://streams/cartoon.m3u8
"#,
    );
    write(
        dir.path(),
        "channels/de.m3u",
        r#"#EXTM3U
#EXTINF:-1 tvg-language="German" group-title="news",Tagesschau
http://streams/tagesschau.m3u8
#EXTINF:-1,Unsorted Channel
http://streams/unsorted.m3u8
#EXTINF:-1 tvg-language="deu" group-title="Sport",Sport1
http://streams/sport1.m3u8
#EXTINF:-1 group-title="Sport",No Stream
"#,
    );
    dir
}

#[test]
fn single_channel_appears_in_every_view() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "index/index.m3u", "#EXTM3U\n#EXTINF:-1,US\nus.m3u\n");
    write(
        dir.path(),
        "us.m3u",
        "#EXTM3U\n#EXTINF:-1 group-title=\"News\",Channel1\nhttp://x/1\n",
    );

    let summary = m3u_indexer::run(&config_for(&dir)).unwrap();
    assert_eq!(summary.report.channels, 1);

    for file in [
        "channels/index.m3u",
        "channels/categories/news.m3u",
        "channels/countries/us.m3u",
        "channels/languages/undefined.m3u",
    ] {
        let content = read(dir.path(), file);
        assert!(content.starts_with("#EXTM3U\n"), "{file}");
        assert!(content.contains(",Channel1\nhttp://x/1\n"), "{file}");
    }

    assert_eq!(
        read(dir.path(), "index/country.m3u"),
        "#EXTM3U\n#EXTINF:-1,United States\nchannels/countries/us.m3u\n"
    );
}

#[test]
fn full_tree() {
    let dir = fixture();
    let summary = m3u_indexer::run(&config_for(&dir)).unwrap();

    assert_eq!(summary.report.channels, 5);
    assert_eq!(summary.report.countries, 2);
    assert_eq!(summary.report.languages, 4);
    assert_eq!(summary.report.categories, 4);
    assert_eq!(summary.skipped, 1);

    let root = dir.path().join("channels");
    for file in [
        ".nojekyll",
        "index.m3u",
        "channels.json",
        "index.country.m3u",
        "index.language.m3u",
        "index.category.m3u",
        "countries/us.m3u",
        "countries/de.m3u",
        "categories/news.m3u",
        "categories/kids.m3u",
        "categories/sport.m3u",
        "categories/other.m3u",
        "languages/en.m3u",
        "languages/es.m3u",
        "languages/de.m3u",
        "languages/undefined.m3u",
    ] {
        assert!(root.join(file).is_file(), "missing {file}");
    }

    let news = parse_playlist(&read(dir.path(), "channels/categories/news.m3u"), "news.m3u").unwrap();
    let names: Vec<_> = news.items.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["CNN", "Tagesschau"]);

    let german = parse_playlist(&read(dir.path(), "channels/languages/de.m3u"), "de.m3u").unwrap();
    assert_eq!(german.items.len(), 2);

    assert_eq!(
        read(dir.path(), "index/language.m3u"),
        "#EXTM3U\n\
         #EXTINF:-1,deu\nchannels/languages/de.m3u\n\
         #EXTINF:-1,eng\nchannels/languages/en.m3u\n\
         #EXTINF:-1,spa\nchannels/languages/es.m3u\n\
         #EXTINF:-1,undefined\nchannels/languages/undefined.m3u\n"
    );
    assert_eq!(
        read(dir.path(), "index/category.m3u"),
        "#EXTM3U\n\
         #EXTINF:-1,Kids\nchannels/categories/kids.m3u\n\
         #EXTINF:-1,News\nchannels/categories/news.m3u\n\
         #EXTINF:-1,Other\nchannels/categories/other.m3u\n\
         #EXTINF:-1,Sport\nchannels/categories/sport.m3u\n"
    );
}

#[test]
fn country_index_follows_root_playlist_order() {
    let dir = fixture();
    m3u_indexer::run(&config_for(&dir)).unwrap();

    // the root lists us before de
    assert_eq!(
        read(dir.path(), "index/country.m3u"),
        "#EXTM3U\n\
         #EXTINF:-1,United States\nchannels/countries/us.m3u\n\
         #EXTINF:-1,Germany\nchannels/countries/de.m3u\n"
    );

    write(
        dir.path(),
        "index/index.m3u",
        "#EXTM3U\n#EXTINF:-1,Germany\nchannels/de.m3u\n#EXTINF:-1,United States\nchannels/us.m3u\n",
    );
    m3u_indexer::run(&config_for(&dir)).unwrap();
    assert_eq!(
        read(dir.path(), "index/country.m3u"),
        "#EXTM3U\n\
         #EXTINF:-1,Germany\nchannels/countries/de.m3u\n\
         #EXTINF:-1,United States\nchannels/countries/us.m3u\n"
    );
}

#[test]
fn generated_channels_read_back_identically() {
    let dir = fixture();
    m3u_indexer::run(&config_for(&dir)).unwrap();

    let index = parse_playlist(&read(dir.path(), "channels/index.m3u"), "index.m3u").unwrap();
    assert!(index.malformed.is_empty());

    let channels: Vec<_> = index
        .items
        .iter()
        .map(|entry| create_channel(entry).unwrap())
        .collect();
    let json: Vec<m3u_indexer::models::Channel> =
        serde_json::from_str(&read(dir.path(), "channels/channels.json")).unwrap();

    assert_eq!(channels.len(), json.len());
    for (from_playlist, from_json) in channels.iter().zip(&json) {
        assert_eq!(from_playlist.name, from_json.name);
        assert_eq!(from_playlist.url, from_json.url);
        assert_eq!(from_playlist.category, from_json.category);
        assert_eq!(from_playlist.languages, from_json.languages);
        assert_eq!(from_playlist.country.code, from_json.country.code);
        assert_eq!(from_playlist.tvg, from_json.tvg);
    }

    let cnn = json.iter().find(|c| c.name == "CNN").unwrap();
    assert_eq!(cnn.tvg.url, "http://epg.example/us.xml");
    assert_eq!(cnn.logo, "http://logos/cnn.png");
}

#[test]
fn unreadable_country_playlist_aborts_by_default() {
    let dir = fixture();
    write(
        dir.path(),
        "index/index.m3u",
        "#EXTM3U\n#EXTINF:-1,France\nchannels/fr.m3u\n#EXTINF:-1,Germany\nchannels/de.m3u\n",
    );

    let err = m3u_indexer::run(&config_for(&dir)).unwrap_err();
    assert!(matches!(err, AppError::Parse(ParseError::Unreadable { .. })));
    assert!(!dir.path().join("channels/index.m3u").exists());
}

#[test]
fn unreadable_country_playlist_can_be_skipped() {
    let dir = fixture();
    write(
        dir.path(),
        "index/index.m3u",
        "#EXTM3U\n#EXTINF:-1,France\nchannels/fr.m3u\n#EXTINF:-1,Germany\nchannels/de.m3u\n",
    );

    let mut config = config_for(&dir);
    config.aggregation.skip_failed_sources = true;
    let summary = m3u_indexer::run(&config).unwrap();

    assert_eq!(summary.report.channels, 3);
    assert_eq!(summary.report.countries, 1);
    // the missing playlist plus the dangling metadata line in de.m3u
    assert_eq!(summary.skipped, 2);
}

#[test]
fn regeneration_drops_stale_groups() {
    let dir = fixture();
    let config = config_for(&dir);
    m3u_indexer::run(&config).unwrap();
    assert!(dir.path().join("channels/categories/sport.m3u").exists());

    write(
        dir.path(),
        "index/index.m3u",
        "#EXTM3U\n#EXTINF:-1,United States\nchannels/us.m3u\n",
    );
    m3u_indexer::run(&config).unwrap();

    assert!(!dir.path().join("channels/categories/sport.m3u").exists());
    assert!(!dir.path().join("channels/countries/de.m3u").exists());
    // input playlists next to the group directories are left alone
    assert!(dir.path().join("channels/de.m3u").exists());
}
