//! Sample documents.

/// Mixed Japanese document exercising every definition form.
///
/// Blank lines contain stray tabs to check paragraph splitting.
pub const JAPANESE_DOCUMENT: &str = " This text [will]: be included. \n\t\n[密林]: /密/林\nみつ‐りん【密林】\n樹木などがすきまのないほど生い茂っている林。\n\t\n\t\nThis will be included\n\t\n[link refs]: won't result in terms, not referenced\n* This list is con sumed by the above\n\t\n* Bullet points should render\n* Like you expect them\n* *This* is still mark down.\n\t\n[c]: /え\n伝えられ =>\u{3000}伝える\n\t\n[a]: /\nひ‐ぶん【碑文】 \n石碑に彫りつけた文章。碑銘。\n\t\n筑波大などの国際研究チームは、カンボジアの北西 部の[密林][]に、古代クメール王朝が９世紀ごろに築いた[最初]の首都\n「[マヘンドラパルバタ][b]」の遺跡を 見つけた、と発表した。１２世紀前半に建設された[アンコールワット]より\n３００年ほど古い。これまで、[碑文][a][伝えられ][c]、寺院の一部が見つかっていたが、都市の全容はわかっていなかった。\n\t\n[アンコールワット]: /アンコー/ルワ/\n《「寺院町」の意》アンコールにある石造寺院遺跡。12世紀初め、クメール王朝スールヤバルマン2世の治下に建立。1992年、アンコールの他の遺跡とともに世界遺産（文化遺産）に登録された。 \n\t\n[b]: /\nマヘンドラパルバタ\n\t\n[unreferenced resource]: /\n\t\n";

/// Prose left from [`JAPANESE_DOCUMENT`] once definitions are removed.
pub const JAPANESE_DOCUMENT_PROSE: &str = " This text [will]: be included.\n\nThis will be included\n\n[link refs]: won't result in terms, not referenced\n* This list is con sumed by the above\n\n* Bullet points should render\n* Like you expect them\n* *This* is still mark down.\n\n筑波大などの国際研究チームは、カンボジアの北西 部の[密林][]に、古代クメール王朝が９世紀ごろに築いた[最初]の首都\n「[マヘンドラパルバタ][b]」の遺跡を 見つけた、と発表した。１２世紀前半に建設された[アンコールワット]より\n３００年ほど古い。これまで、[碑文][a][伝えられ][c]、寺院の一部が見つかっていたが、都市の全容はわかっていなかった。\n\n[unreferenced resource]: /\n\n";

/// Latin document using the whitespace splitter.
pub const ENGLISH_DOCUMENT: &str = "Rust uses [ownership rules][own] and [borrowing] to manage memory.\n\
\n\
[own]: /ownership/\n\
Each value has a single owner.\n\
\n\
[borrowing]: /\n\
References that do not take ownership.\n\
\n\
[lifetimes]: /\n\
Never mentioned in the prose.\n\
\n\
[own]: /rules/\n\
A second definition that is ignored.";
