/// Maps characters that are invalid in Windows filenames to their full-width
/// counterparts. One-to-one, so character count is preserved.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|ch| match ch {
            '/' => '／',
            '\\' => '＼',
            ':' => '：',
            '*' => '＊',
            '?' => '？',
            '"' => '”',
            '<' => '＜',
            '>' => '＞',
            '|' => '｜',
            other => other,
        })
        .collect()
}
