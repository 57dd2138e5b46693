/// Text announcing how many matches were highlighted.
pub fn summary_text(total: usize, surfaces: usize) -> String {
	let mut text = match total {
		1 => "1 match".to_string(),
		n => format!("{n} matches"),
	};
	if surfaces > 1 {
		text.push_str(&format!(" in {surfaces} surfaces"));
	}
	text
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::summary_text;

	#[rstest]
	#[case(0, 0, "0 matches")]
	#[case(1, 1, "1 match")]
	#[case(2, 1, "2 matches")]
	#[case(5, 2, "5 matches in 2 surfaces")]
	fn formats(#[case] total: usize, #[case] surfaces: usize, #[case] expected: &str) {
		assert_eq!(summary_text(total, surfaces), expected);
	}
}
