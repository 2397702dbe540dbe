//! Precomputed Ziggurat layer tables.
//!
//! Generated offline with the Marsaglia & Tsang setup procedure, scaled for a
//! 32-bit magnitude `j` in `[0, 2^32)`. Layer 0 is the base strip: its `k` entry
//! bounds the rectangular part, everything beyond goes to the tail sampler.
//! `k[1]` is always 0, so layer 1 always takes the wedge test.

#![allow(clippy::unreadable_literal, clippy::excessive_precision)]

/// Start of the exponential tail (right edge of the base strip).
pub const EXP_R: f64 = 7.69711747013104972;

/// Start of the normal tail (right edge of the base strip).
pub const NORM_R: f64 = 3.6541528853610088;

/// Fast-accept thresholds for the exponential layers.
pub static EXP_K: [u64; 256] = [
    0xe290a139, 0x00000000, 0x9beadebc, 0xc377ac71, 0xd4ddb990, 0xde893fb8,
    0xe4a8e87c, 0xe8dff16a, 0xebf2deab, 0xee49a6e8, 0xf0204efd, 0xf19bdb8e,
    0xf2d458bb, 0xf3da104b, 0xf4b86d78, 0xf577ad8a, 0xf61de83d, 0xf6afb784,
    0xf730a573, 0xf7a37651, 0xf80a5bb6, 0xf867189d, 0xf8bb1b4f, 0xf9079062,
    0xf94d70ca, 0xf98d8c7d, 0xf9c8928a, 0xf9ff175b, 0xfa319996, 0xfa6085f8,
    0xfa8c3a62, 0xfab5084e, 0xfadb36c8, 0xfaff0410, 0xfb20a6ea, 0xfb404fb4,
    0xfb5e2951, 0xfb7a59e9, 0xfb95038c, 0xfbae44ba, 0xfbc638d8, 0xfbdcf892,
    0xfbf29a30, 0xfc0731df, 0xfc1ad1ed, 0xfc2d8b02, 0xfc3f6c4d, 0xfc5083ac,
    0xfc60ddd1, 0xfc708662, 0xfc7f8810, 0xfc8decb4, 0xfc9bbd62, 0xfca9027c,
    0xfcb5c3c3, 0xfcc20864, 0xfccdd70a, 0xfcd935e3, 0xfce42ab0, 0xfceebace,
    0xfcf8eb3b, 0xfd02c0a0, 0xfd0c3f59, 0xfd156b7b, 0xfd1e48d6, 0xfd26daff,
    0xfd2f2552, 0xfd372af7, 0xfd3eeee5, 0xfd4673e7, 0xfd4dbc9e, 0xfd54cb85,
    0xfd5ba2f2, 0xfd62451b, 0xfd68b415, 0xfd6ef1da, 0xfd750047, 0xfd7ae120,
    0xfd809612, 0xfd8620b4, 0xfd8b8285, 0xfd90bcf5, 0xfd95d15e, 0xfd9ac10b,
    0xfd9f8d36, 0xfda43708, 0xfda8bf9e, 0xfdad2806, 0xfdb17141, 0xfdb59c46,
    0xfdb9a9fd, 0xfdbd9b46, 0xfdc170f6, 0xfdc52bd8, 0xfdc8ccac, 0xfdcc542d,
    0xfdcfc30b, 0xfdd319ef, 0xfdd6597a, 0xfdd98245, 0xfddc94e5, 0xfddf91e6,
    0xfde279ce, 0xfde54d1f, 0xfde80c52, 0xfdeab7de, 0xfded5034, 0xfdefd5be,
    0xfdf248e3, 0xfdf4aa06, 0xfdf6f984, 0xfdf937b6, 0xfdfb64f4, 0xfdfd818d,
    0xfdff8dd0, 0xfe018a08, 0xfe03767a, 0xfe05536c, 0xfe07211c, 0xfe08dfc9,
    0xfe0a8fab, 0xfe0c30fb, 0xfe0dc3ec, 0xfe0f48b1, 0xfe10bf76, 0xfe122869,
    0xfe1383b4, 0xfe14d17c, 0xfe1611e7, 0xfe174516, 0xfe186b2a, 0xfe19843e,
    0xfe1a9070, 0xfe1b8fd6, 0xfe1c8289, 0xfe1d689b, 0xfe1e4220, 0xfe1f0f26,
    0xfe1fcfbc, 0xfe2083ed, 0xfe212bc3, 0xfe21c745, 0xfe225678, 0xfe22d95f,
    0xfe234ffb, 0xfe23ba4a, 0xfe241849, 0xfe2469f2, 0xfe24af3c, 0xfe24e81e,
    0xfe25148b, 0xfe253474, 0xfe2547c7, 0xfe254e70, 0xfe25485a, 0xfe25356a,
    0xfe251586, 0xfe24e88f, 0xfe24ae64, 0xfe2466e1, 0xfe2411df, 0xfe23af34,
    0xfe233eb4, 0xfe22c02c, 0xfe22336b, 0xfe219838, 0xfe20ee58, 0xfe20358c,
    0xfe1f6d92, 0xfe1e9621, 0xfe1daef0, 0xfe1cb7ac, 0xfe1bb002, 0xfe1a9798,
    0xfe196e0d, 0xfe1832fd, 0xfe16e5fe, 0xfe15869d, 0xfe141464, 0xfe128ed3,
    0xfe10f565, 0xfe0f478c, 0xfe0d84b1, 0xfe0bac36, 0xfe09bd73, 0xfe07b7b5,
    0xfe059a40, 0xfe03644c, 0xfe011504, 0xfdfeab88, 0xfdfc26e9, 0xfdf98629,
    0xfdf6c83b, 0xfdf3ec01, 0xfdf0f04a, 0xfdedd3d1, 0xfdea953d, 0xfde7331e,
    0xfde3abe9, 0xfddffdfb, 0xfddc2791, 0xfdd826cd, 0xfdd3f9a8, 0xfdcf9dfc,
    0xfdcb1176, 0xfdc65198, 0xfdc15bb3, 0xfdbc2ce2, 0xfdb6c206, 0xfdb117be,
    0xfdab2a63, 0xfda4f5fd, 0xfd9e7640, 0xfd97a67a, 0xfd908192, 0xfd8901f2,
    0xfd812182, 0xfd78d98e, 0xfd7022bb, 0xfd66f4ed, 0xfd5d4732, 0xfd530f9c,
    0xfd48432b, 0xfd3cd59a, 0xfd30b936, 0xfd23dea4, 0xfd16349e, 0xfd07a7a3,
    0xfcf8219b, 0xfce7895b, 0xfcd5c220, 0xfcc2aadb, 0xfcae1d5e, 0xfc97ed4e,
    0xfc7fe6d4, 0xfc65ccf3, 0xfc495762, 0xfc2a2fc8, 0xfc07ee19, 0xfbe213c1,
    0xfbb8051a, 0xfb890078, 0xfb5411a5, 0xfb180005, 0xfad33482, 0xfa839276,
    0xfa263b32, 0xf9b72d1c, 0xf930a1a2, 0xf889f023, 0xf7b577d2, 0xf69c650c,
    0xf51530f0, 0xf2cb0e3c, 0xeeefb15d, 0xe6da6ecf,
];

/// Exponential layer widths divided by 2^32.
pub static EXP_W: [f64; 256] = [
    2.0249554585039273e-09, 1.486674039973914e-11, 2.4409617196260667e-11,
    3.196880708914543e-11, 3.844677064665297e-11, 4.422820397243645e-11,
    4.9516444707048736e-11, 5.443358865093317e-11, 5.905944001532905e-11,
    6.34494203791173e-11, 6.764381087646596e-11, 7.167294497483693e-11,
    7.5560323199469e-11, 7.932458097693723e-11, 8.298078557904666e-11,
    8.654132143825228e-11, 9.001651265218844e-11, 9.341507193080098e-11,
    9.674443155535412e-11, 1.0001099208030168e-10, 1.0322031240760172e-10,
    1.0637725725104571e-10, 1.0948611308871047e-10, 1.125506804449162e-10,
    1.1557434814019853e-10, 1.1856015362861901e-10, 1.2151083247552976e-10,
    1.2442885926858652e-10, 1.2731648170466315e-10, 1.3017574919190738e-10,
    1.3300853700670142e-10, 1.3581656682043557e-10, 1.3860142424039144e-10,
    1.41364573878306e-10, 1.44107372359111e-10, 1.4683107960351982e-10,
    1.4953686865617902e-10, 1.522258342820371e-10, 1.5489900051445652e-10,
    1.575573273071839e-10, 1.6020171641692235e-10, 1.6283301662263273e-10,
    1.654520283708477e-10, 1.680595079224455e-10, 1.7065617106490894e-10,
    1.7324269644462226e-10, 1.7581972856586386e-10, 1.783878804965491e-10,
    1.8094773631522658e-10, 1.8349985332914917e-10, 1.8604476408927868e-10,
    1.8858297822471202e-10, 1.9111498411614723e-10, 1.9364125042554764e-10,
    1.9616222749705624e-10, 1.986783486423952e-10, 2.011900313224188e-10,
    2.0369767823513247e-10, 2.0620167831931063e-10, 2.087024076818232e-10,
    2.112002304558852e-10, 2.1369549959666193e-10, 2.1618855761997644e-10,
    2.186797372892644e-10, 2.211693622553898e-10, 2.2365774765346816e-10,
    2.261452006604297e-10, 2.2863202101668864e-10, 2.3111850151495907e-10,
    2.3360492845897016e-10, 2.360915820945744e-10, 2.3857873701551393e-10,
    2.4106666254590454e-10, 2.4355562310131354e-10, 2.460458785301426e-10,
    2.485376844368799e-10, 2.510312924886523e-10, 2.535269507063894e-10,
    2.5602490374180415e-10, 2.585253931412964e-10, 2.6102865759779937e-10,
    2.635349331915095e-10, 2.6604445362036876e-10, 2.68557450421102e-10,
    2.710741531815563e-10, 2.7359478974503266e-10, 2.7611958640725403e-10,
    2.786487681065693e-10, 2.8118255860795293e-10, 2.837211806813232e-10,
    2.8626485627467025e-10, 2.8881380668245404e-10, 2.913682527097064e-10,
    2.9392841483224535e-10, 2.9649451335338897e-10, 2.9906676855753465e-10,
    3.016454008609524e-10, 3.042306309601231e-10, 3.068226799779396e-10,
    3.0942176960807203e-10, 3.120281222577915e-10, 3.146419611895305e-10,
    3.172635106614526e-10, 3.1989299606729535e-10, 3.225306440757405e-10,
    3.2517668276956344e-10, 3.278313417848049e-10, 3.304948524502066e-10,
    3.33167447927147e-10, 3.358493633503123e-10, 3.3854083596933475e-10,
    3.412421052916313e-10, 3.4395341322667273e-10, 3.46675004231917e-10,
    3.494071254606396e-10, 3.5215002691189675e-10, 3.549039615828604e-10,
    3.5766918562376677e-10, 3.604459584957252e-10, 3.6323454313163823e-10,
    3.660352061004911e-10, 3.688482177752741e-10, 3.716738525048091e-10,
    3.7451238878976035e-10, 3.7736410946311836e-10, 3.8022930187545505e-10,
    3.831082580852609e-10, 3.860012750546849e-10, 3.8890865485101284e-10,
    3.918307048542317e-10, 3.947677379710454e-10, 3.977200728557206e-10,
    4.0068803413816137e-10, 4.0367195265962996e-10, 4.066721657165498e-10,
    4.096890173128513e-10, 4.127228584213427e-10, 4.157740472546139e-10,
    4.1884294954600986e-10, 4.2192993884123634e-10, 4.2503539680119584e-10,
    4.281597135166822e-10, 4.3130328783559965e-10, 4.3446652770341084e-10,
    4.3764985051756043e-10, 4.408536834966642e-10, 4.4407846406530283e-10,
    4.4732464025531137e-10, 4.505926711245093e-10, 4.538830271938779e-10,
    4.5719619090425494e-10, 4.6053265709368507e-10, 4.63892933496641e-10,
    4.672775412664091e-10, 4.706870155220212e-10, 4.74121905921206e-10,
    4.775827772609386e-10, 4.810702101072703e-10, 4.845848014562447e-10,
    4.881271654278306e-10, 4.916979339949417e-10, 4.952977577497641e-10,
    4.989273067097741e-10, 5.025872711660073e-10, 5.062783625763314e-10,
    5.100013145066842e-10, 5.137568836234657e-10, 5.175458507405212e-10,
    5.21369021924424e-10, 5.252272296620576e-10, 5.291213340948229e-10,
    5.330522243241474e-10, 5.370208197933575e-10, 5.410280717513981e-10,
    5.4507496480435e-10, 5.491625185611978e-10, 5.532917893808662e-10,
    5.574638722281573e-10, 5.616799026468934e-10, 5.659410588593269e-10,
    5.702485640016967e-10, 5.746036885067274e-10, 5.790077526448783e-10,
    5.834621292372686e-10, 5.879682465544501e-10, 5.92527591416582e-10,
    5.971417125121004e-10, 6.018122239536933e-10, 6.065408090923064e-10,
    6.11329224612049e-10, 6.161793049312685e-10, 6.21092966937755e-10,
    6.260722150890632e-10, 6.311191469123422e-10, 6.362359589419096e-10,
    6.414249531371391e-10, 6.466885438281477e-10, 6.52029265242335e-10,
    6.574497796711595e-10, 6.629528863437449e-10, 6.685415310821349e-10,
    6.742188168224279e-10, 6.799880150968072e-10, 6.858525785838827e-10,
    6.91816154849038e-10, 6.97882601412975e-10, 7.040560023057454e-10,
    7.103406862857415e-10, 7.167412469289477e-10, 7.23262564823922e-10,
    7.299098321433274e-10, 7.36688579904375e-10, 7.436047082795391e-10,
    7.506645203768892e-10, 7.578747599782539e-10, 7.652426538055458e-10,
    7.727759589838675e-10, 7.804830164881679e-10, 7.883728115028472e-10,
    7.964550417966955e-10, 8.047401954263357e-10, 8.132396393395169e-10,
    8.219657207674682e-10, 8.309318836890947e-10, 8.401528031399729e-10,
    8.496445407534143e-10, 8.594247256958435e-10, 8.695127661432599e-10,
    8.799300977056073e-10, 8.907004768313693e-10, 9.0185032933939e-10,
    9.134091670009051e-10, 9.254100887742333e-10, 9.378903882223966e-10,
    9.508922953177937e-10, 9.644638899862886e-10, 9.786602374481e-10,
    9.935448133101142e-10, 1.0091913119697182e-09, 1.0256859691519228e-09,
    1.0431305846498399e-09, 1.0616465149697269e-09, 1.081380035127533e-09,
    1.1025096747562618e-09, 1.1252564706432428e-09, 1.1498986477733707e-09,
    1.1767932423346918e-09, 1.2064090187897673e-09, 1.2393785886825987e-09,
    1.276584953890662e-09, 1.3193139264951536e-09, 1.3695434471115933e-09,
    1.4305498138471676e-09, 1.5083650345524237e-09, 1.6160853275510512e-09,
    1.792124814850057e-09,
];

/// `exp(-x)` at each exponential layer boundary.
pub static EXP_F: [f64; 256] = [
    1.0, 0.9381436808621765, 0.9004699299257477,
    0.8717043323812047, 0.8477855006239905, 0.8269932966430511,
    0.808421651523009, 0.7915276369724963, 0.7759568520401162,
    0.7614633888498968, 0.7478686219851957, 0.735038092431424,
    0.7228676595935725, 0.7112747608050765, 0.7001926550827886,
    0.6895664961170784, 0.6793505722647658, 0.6695063167319252,
    0.6600008410790001, 0.6508058334145714, 0.6418967164272664,
    0.6332519942143664, 0.6248527387036662, 0.6166821809152079,
    0.6087253820796223, 0.6009689663652326, 0.5934009016917338,
    0.5860103184772684, 0.5787873586028454, 0.5717230486648262,
    0.5648091929124006, 0.5580382822625879, 0.5514034165406417,
    0.5448982376724401, 0.5385168720028622, 0.5322538802630437,
    0.5261042139836201, 0.5200631773682339, 0.5141263938147489,
    0.5082897764106432, 0.5025495018413481, 0.4969019872415499,
    0.49134386959403287, 0.48587198734188525, 0.48048336393045454,
    0.4751751930373777, 0.4699448252839603, 0.4647897562504265,
    0.459707615642138, 0.45469615747461584, 0.44975325116275533,
    0.44487687341454885, 0.4400651008423542, 0.4353161032156369,
    0.43062813728845917, 0.4259995411430347, 0.4214287289976169,
    0.41691418643300326, 0.4124544659971615, 0.40804818315203273,
    0.4036940125305306, 0.3993906844752314, 0.39513698183329043,
    0.3909317369847974, 0.38677382908413793, 0.38266218149601006,
    0.37859575940958107, 0.37457356761590244, 0.3705946484351463,
    0.36665807978151443, 0.3627629733548181, 0.35890847294875006,
    0.35509375286678774, 0.3513180164374836, 0.34758049462163726,
    0.3438804447045027, 0.34021714906678024, 0.3365899140286778,
    0.3329980687618092, 0.32944096426413655, 0.32591797239355635,
    0.3224284849560893, 0.31897191284495735, 0.315547685227129,
    0.3121552487741797, 0.30879406693456024, 0.3054636192445903,
    0.3021634006756935, 0.2988929210155818, 0.29565170428126125,
    0.29243928816189263, 0.28925522348967775, 0.2860990737370769,
    0.2829704145387808, 0.2798688332369729, 0.2767939284485174,
    0.27374530965280297, 0.27072259679906, 0.26772541993204485,
    0.26475341883506226, 0.26180624268936303, 0.2588835497490163,
    0.25598500703041543, 0.2531102900156295, 0.25025908236886235,
    0.24743107566532765, 0.24462596913189213, 0.24184346939887724,
    0.23908329026244915, 0.23634515245705962, 0.23362878343743335,
    0.23093391716962744, 0.22826029393071676, 0.22560766011668415,
    0.22297576805812028, 0.22036437584335958, 0.21777324714870058,
    0.2152021510753787, 0.21265086199297834, 0.2101191593889883,
    0.20760682772422212, 0.20511365629383782, 0.2026394390937091,
    0.20018397469191135, 0.19774706610509893, 0.19532852067956327,
    0.19292814997677138, 0.19054576966319545, 0.18818119940425432,
    0.18583426276219714, 0.1835047870977675, 0.18119260347549634,
    0.17889754657247836, 0.17661945459049494, 0.17435816917135352,
    0.1721135353153201, 0.16988540130252766, 0.1676736186172502,
    0.165478041874936, 0.16329852875190182, 0.16113493991759203,
    0.1589871389693142, 0.15685499236936523, 0.15473836938446808,
    0.15263714202744288, 0.15055118500103992, 0.14848037564386682,
    0.14642459387834497, 0.1443837221606348, 0.14235764543247223,
    0.1403462510748625, 0.1383494288635803, 0.13636707092642894,
    0.1343990717022137, 0.13244532790138763, 0.13050573846833088,
    0.1285802045452283, 0.12666862943751078, 0.12477091858083104,
    0.12288697950954522, 0.1210167218266749, 0.11916005717532775,
    0.11731689921155564, 0.1154871635786336, 0.11367076788274438,
    0.11186763167005638, 0.11007767640518545, 0.10830082545103385,
    0.10653700405000172, 0.10478613930657024, 0.1030481601712578,
    0.10132299742595369, 0.09961058367063715, 0.09791085331149221,
    0.09622374255043283, 0.09454918937605587, 0.09288713355604357,
    0.09123751663104017, 0.08960028191003284, 0.08797537446727019,
    0.08636274114075689, 0.0847623305323681, 0.08317409300963235,
    0.08159798070923742, 0.0800339475423199, 0.07848194920160644,
    0.07694194317048052, 0.0754138887340584, 0.07389774699236475,
    0.07239348087570872, 0.07090105516237181, 0.06942043649872875,
    0.06795159342193662, 0.06649449638533979, 0.06504911778675376,
    0.06361543199980735, 0.06219341540854101, 0.06078304644547963,
    0.05938430563342025, 0.05799717563120064, 0.05662164128374284,
    0.05525768967669701, 0.05390531019604605, 0.052564494593071664,
    0.051235237055126254, 0.04991753428270636, 0.04861138557337948,
    0.04731679291318155, 0.04603376107617516, 0.04476229773294327,
    0.043502413568888176, 0.04225412241331624, 0.04101744138041482,
    0.03979239102337412, 0.03857899550307485, 0.03737728277295936,
    0.03618728478193143, 0.03500903769739742, 0.033842582150874344,
    0.03268796350895954, 0.03154523217289361, 0.030414443910466608,
    0.029295660224637397, 0.028188948763978632, 0.0270943837809558,
    0.02601204664513422, 0.024942026419731787, 0.023884420511558174,
    0.02283933540638524, 0.021806887504283584, 0.020787204072578117,
    0.01978042433800974, 0.018786700744696024, 0.017806200410911355,
    0.01683910682603994, 0.015885621839973156, 0.014945968011691148,
    0.014020391403181943, 0.013109164931254991, 0.012212592426255378,
    0.0113310135978346, 0.010464810181029982, 0.009614413642502213,
    0.008780314985808977, 0.007963077438017043, 0.007163353183634991,
    0.006381905937319183, 0.005619642207205489, 0.0048776559835424,
    0.0041572951208338005, 0.003460264777836907, 0.0027887987935740783,
    0.002145967743718907, 0.0015362997803015728, 0.0009672692823271743,
    0.0004541343538414966,
];

/// Fast-accept thresholds for the normal layers.
pub static NORM_K: [u64; 256] = [
    0xef33d802, 0x00000000, 0xc08be98f, 0xda354fab, 0xe51f67ec, 0xeb255e9d,
    0xeef4b817, 0xf19470af, 0xf37ed61f, 0xf4f46956, 0xf61a5e41, 0xf707a755,
    0xf7cb2ec2, 0xf86f10c6, 0xf8fa6578, 0xf9724c74, 0xf9da907d, 0xfa360f58,
    0xfa86fde5, 0xfacf160d, 0xfb0fb671, 0xfb49f8d5, 0xfb7ec236, 0xfbaece9a,
    0xfbdab9d0, 0xfc03060f, 0xfc282103, 0xfc4a67ae, 0xfc6a2977, 0xfc87aa92,
    0xfca325e4, 0xfcbcce90, 0xfcd4d12f, 0xfceb54d8, 0xfd007bf1, 0xfd1464dd,
    0xfd272a8e, 0xfd38e4ff, 0xfd49a999, 0xfd598b89, 0xfd689c08, 0xfd76ea9c,
    0xfd848547, 0xfd9178ba, 0xfd9dd07a, 0xfda99701, 0xfdb4d5dc, 0xfdbf95c5,
    0xfdc9debb, 0xfdd3b811, 0xfddd2883, 0xfde63643, 0xfdeee708, 0xfdf7401a,
    0xfdff4659, 0xfe06fe4b, 0xfe0e6c22, 0xfe1593c2, 0xfe1c78cb, 0xfe231e9d,
    0xfe29885d, 0xfe2fb8fb, 0xfe35b335, 0xfe3b799c, 0xfe410e99, 0xfe46746d,
    0xfe4bad34, 0xfe50baed, 0xfe559f74, 0xfe5a5c8e, 0xfe5ef3e1, 0xfe6366fd,
    0xfe67b75c, 0xfe6be661, 0xfe6ff55e, 0xfe73e590, 0xfe77b823, 0xfe7b6e37,
    0xfe7f08d7, 0xfe828905, 0xfe85efb3, 0xfe893dc8, 0xfe8c741f, 0xfe8f9387,
    0xfe929cc8, 0xfe95909d, 0xfe986fb9, 0xfe9b3ac7, 0xfe9df269, 0xfea0973a,
    0xfea329cf, 0xfea5aab3, 0xfea81a6d, 0xfeaa797d, 0xfeacc85f, 0xfeaf0786,
    0xfeb13762, 0xfeb3585f, 0xfeb56ae3, 0xfeb76f4e, 0xfeb965fe, 0xfebb4f4c,
    0xfebd2b8f, 0xfebefb16, 0xfec0be31, 0xfec2752b, 0xfec42049, 0xfec5bfd2,
    0xfec75406, 0xfec8dd25, 0xfeca5b69, 0xfecbcf0c, 0xfecd3845, 0xfece9748,
    0xfecfec47, 0xfed13773, 0xfed278f8, 0xfed3b102, 0xfed4dfba, 0xfed60549,
    0xfed721d4, 0xfed8357e, 0xfed9406a, 0xfeda42b8, 0xfedb3c87, 0xfedc2df4,
    0xfedd171a, 0xfeddf813, 0xfeded0f9, 0xfedfa1e0, 0xfee06ae1, 0xfee12c0d,
    0xfee1e579, 0xfee29734, 0xfee34150, 0xfee3e3db, 0xfee47ee2, 0xfee51271,
    0xfee59e94, 0xfee62352, 0xfee6a0b5, 0xfee716c3, 0xfee78583, 0xfee7ecf7,
    0xfee84d24, 0xfee8a60b, 0xfee8f7ac, 0xfee94207, 0xfee9851a, 0xfee9c0e1,
    0xfee9f557, 0xfeea2276, 0xfeea4836, 0xfeea668f, 0xfeea7d76, 0xfeea8ce0,
    0xfeea94be, 0xfeea9502, 0xfeea8d9c, 0xfeea7e78, 0xfeea6784, 0xfeea48aa,
    0xfeea21d2, 0xfee9f2e3, 0xfee9bbc2, 0xfee97c52, 0xfee93473, 0xfee8e405,
    0xfee88ae3, 0xfee828e7, 0xfee7bdea, 0xfee749bf, 0xfee6cc3a, 0xfee64529,
    0xfee5b45a, 0xfee51994, 0xfee474a0, 0xfee3c53e, 0xfee30b2e, 0xfee2462a,
    0xfee175eb, 0xfee09a22, 0xfedfb27e, 0xfedebea7, 0xfeddbe42, 0xfedcb0ec,
    0xfedb9640, 0xfeda6dce, 0xfed93723, 0xfed7f1c3, 0xfed69d2b, 0xfed538d0,
    0xfed3c41d, 0xfed23e76, 0xfed0a732, 0xfecefda0, 0xfecd4100, 0xfecb7089,
    0xfec98b61, 0xfec790a0, 0xfec57f50, 0xfec35668, 0xfec114cb, 0xfebeb948,
    0xfebc429a, 0xfeb9af5e, 0xfeb6fe1c, 0xfeb42d3a, 0xfeb13b00, 0xfeae2591,
    0xfeaaeae9, 0xfea788d8, 0xfea3fcff, 0xfea044c8, 0xfe9c5d62, 0xfe9843ba,
    0xfe93f471, 0xfe8f6bd7, 0xfe8aa5dc, 0xfe859e07, 0xfe804f69, 0xfe7ab488,
    0xfe74c751, 0xfe6e8102, 0xfe67da0b, 0xfe60c9f3, 0xfe594733, 0xfe514709,
    0xfe48bd43, 0xfe3f9bff, 0xfe35d35e, 0xfe2b5122, 0xfe200039, 0xfe13c827,
    0xfe068c4e, 0xfdf82b02, 0xfde87c57, 0xfdd7509c, 0xfdc46e52, 0xfdaf8f82,
    0xfd985e1b, 0xfd7e6ef4, 0xfd613adb, 0xfd40149e, 0xfd1a1a7b, 0xfcee2047,
    0xfcba8d85, 0xfc7d26ec, 0xfc32b2f1, 0xfbd6581c, 0xfb606c40, 0xfac40582,
    0xf9e971e0, 0xf89fa48a, 0xf66c5f7f, 0xf1a5a4b3,
];

/// Normal layer widths divided by 2^32.
pub static NORM_W: [f64; 256] = [
    9.105442928935145e-10, 5.011490916676675e-11, 6.663021439389803e-11,
    7.816998268953978e-11, 8.73397413758714e-11, 9.5085505067371e-11,
    1.0186769119153327e-10, 1.0794828105060459e-10, 1.1349189237732308e-10,
    1.1860936171979024e-10, 1.233792213365657e-10, 1.2785934431316023e-10,
    1.3209373155619787e-10, 1.361166979404451e-10, 1.399555750526349e-10,
    1.436325232489583e-10, 1.471657856309378e-10, 1.5057057954473163e-10,
    1.5385974529995722e-10, 1.5704422789333306e-10, 1.6013344116188998e-10,
    1.631355474464559e-10, 1.6605767542077758e-10, 1.689060919222663e-10,
    1.7168633905841006e-10, 1.7440334474890997e-10, 1.7706151269890442e-10,
    1.796647962687396e-10, 1.8221675960803143e-10, 1.8472062862318772e-10,
    1.8717933375916092e-10, 1.8959554613755651e-10, 1.9197170826263927e-10,
    1.9431006025511742e-10, 1.966126623801942e-10, 1.9888141448645865e-10,
    2.0111807285501317e-10, 2.033242648659494e-10, 2.0550150181607113e-10,
    2.076511901632865e-10, 2.0977464142608795e-10, 2.1187308092852333e-10,
    2.1394765555014251e-10, 2.1599944061512006e-10, 2.1802944603396972e-10,
    2.2003862179409972e-10, 2.2202786288121078e-10, 2.2399801370166364e-10,
    2.2594987206600248e-10, 2.278841927854665e-10, 2.2980169092627388e-10,
    2.3170304476049335e-10, 2.335888984472471e-10, 2.3545986447366384e-10,
    2.373165258813019e-10, 2.3915943830058707e-10, 2.409891318130785e-10,
    2.428061126590172e-10, 2.4461086480557153e-10, 2.464038513894208e-10,
    2.481855160457796e-10, 2.4995628413461887e-10, 2.5171656387366573e-10,
    2.534667473867336e-10, 2.5520721167503006e-10, 2.569383195182933e-10,
    2.586604203119058e-10, 2.603738508455136e-10, 2.6207893602813e-10,
    2.6377598956421413e-10, 2.6546531458478323e-10, 2.6714720423722963e-10,
    2.688219422371713e-10, 2.7048980338535603e-10, 2.721510540523645e-10,
    2.738059526336123e-10, 2.754547499769276e-10, 2.7709768978478425e-10,
    2.7873500899308965e-10, 2.803669381282665e-10, 2.8199370164422114e-10,
    2.836155182406601e-10, 2.8523260116409697e-10, 2.868451584927843e-10,
    2.8845339340670673e-10, 2.900575044436841e-10, 2.9165768574255004e-10,
    2.9325412727430096e-10, 2.9484701506204166e-10, 2.9643653139049274e-10,
    2.980228550057703e-10, 2.996061613060968e-10, 3.0118662252405604e-10,
    3.027644079009615e-10, 3.043396838538707e-10, 3.059126141357396e-10,
    3.0748335998918165e-10, 3.090520802942628e-10, 3.1061893171073953e-10,
    3.121840688151196e-10, 3.137476442329025e-10, 3.153098087663368e-10,
    3.168707115180096e-10, 3.1843050001056817e-10, 3.199893203028549e-10,
    3.215473171027242e-10, 3.2310463387679416e-10, 3.2466141295737383e-10,
    3.262177956467966e-10, 3.2777392231937766e-10, 3.2932993252120555e-10,
    3.308859650679685e-10, 3.324421581410082e-10, 3.3399864938178715e-10,
    3.355555759849488e-10, 3.371130747901438e-10, 3.386712823727921e-10,
    3.4023033513394367e-10, 3.4179036938939963e-10, 3.433515214582499e-10,
    3.449139277509823e-10, 3.4647772485731504e-10, 3.4804304963390305e-10,
    3.496100392920679e-10, 3.511788314856989e-10, 3.527495643994753e-10,
    3.543223768375565e-10, 3.558974083128908e-10, 3.5747479913729316e-10,
    3.590546905124438e-10, 3.6063722462196264e-10, 3.6222254472471655e-10,
    3.638107952495198e-10, 3.6540212189139204e-10, 3.6699667170954237e-10,
    3.6859459322725223e-10, 3.701960365338364e-10, 3.7180115338886654e-10,
    3.734100973288489e-10, 3.750230237765549e-10, 3.766400901532113e-10,
    3.7826145599376606e-10, 3.798872830654546e-10, 3.815177354899028e-10,
    3.8315297986901373e-10, 3.847931854148974e-10, 3.864385240841167e-10,
    3.8808917071653686e-10, 3.897453031790816e-10, 3.914071025147157e-10,
    3.930747530969928e-10, 3.9474844279052656e-10, 3.9642836311776515e-10,
    3.981147094324711e-10, 3.9980768110033606e-10, 4.0150748168718436e-10,
    4.032143191552505e-10, 4.049284060680468e-10, 4.0664995980437216e-10,
    4.0837920278204957e-10, 4.1011636269202145e-10, 4.118616727434746e-10,
    4.136153719207144e-10, 4.1537770525256086e-10, 4.171489240950928e-10,
    4.1892928642862947e-10, 4.2071905716990433e-10, 4.225185085004586e-10,
    4.243279202123599e-10, 4.2614758007243894e-10, 4.2797778420632905e-10,
    4.2981883750369766e-10, 4.316710540461699e-10, 4.3353475755956776e-10,
    4.3541028189222255e-10, 4.372979715212662e-10, 4.3919818208896937e-10,
    4.4111128097137205e-10, 4.4303764788164905e-10, 4.4497767551086895e-10,
    4.469317702090435e-10, 4.4890035270962824e-10, 4.5088385890092675e-10,
    4.5288274064817324e-10, 4.54897466670427e-10, 4.5692852347680877e-10,
    4.589764163670525e-10, 4.6104167050183713e-10, 4.631248320489124e-10,
    4.6522646941164607e-10, 4.673471745473065e-10, 4.694875643831612e-10,
    4.716482823393384e-10, 4.73829999968365e-10, 4.760334187223885e-10,
    4.78259271860324e-10, 4.805083265085603e-10, 4.827813858904361e-10,
    4.850792917414922e-10, 4.874029269295396e-10, 4.897532183009076e-10,
    4.921311397768869e-10, 4.945377157274204e-10, 4.96974024652578e-10,
    4.994412032063593e-10, 5.01940450601993e-10, 5.044730334432437e-10,
    5.070402910324376e-10, 5.096436412131229e-10, 5.122845868136846e-10,
    5.149647227680647e-10, 5.176857440012753e-10, 5.204494541809726e-10,
    5.232577754524089e-10, 5.261127592931077e-10, 5.290165986462552e-10,
    5.319716415188615e-10, 5.349804062632214e-10, 5.380455987993279e-10,
    5.411701320832649e-10, 5.443571481842155e-10, 5.476100434031477e-10,
    5.509324969527821e-10, 5.543285038253819e-10, 5.57802412607819e-10,
    5.613589691695956e-10, 5.650033673587548e-10, 5.687413081058666e-10,
    5.725790686750112e-10, 5.765235842366571e-10, 5.805825445031935e-10,
    5.84764508908927e-10, 5.890790447961811e-10, 5.935368943781268e-10,
    5.981501780172197e-10, 6.029326437755942e-10, 6.078999765421144e-10,
    6.130701847445044e-10, 6.184640893655602e-10, 6.24105949719558e-10,
    6.300242748395209e-10, 6.362528910494472e-10, 6.428323698413611e-10,
    6.498119733298164e-10, 6.572523612588004e-10, 6.652294497173588e-10,
    6.738400677247783e-10, 6.832105264085937e-10, 6.935101188441843e-10,
    7.049734219370027e-10, 7.179393740373741e-10, 7.329250894294004e-10,
    7.507798848783199e-10, 7.730547184681441e-10, 8.030976863952737e-10,
    8.507987683082486e-10,
];

/// `exp(-x^2 / 2)` at each normal layer boundary.
pub static NORM_F: [f64; 256] = [
    1.0, 0.9771017012827313, 0.9598790918124159,
    0.945198953453078, 0.9320600759689902, 0.9199915050483602,
    0.9087264400605629, 0.898095921906304, 0.8879846607633999,
    0.8783096558161468, 0.8690086880437932, 0.8600336212030086,
    0.8513462584651237, 0.8429156531184411, 0.8347162929929304,
    0.8267268339520942, 0.8189291916094148, 0.8113078743182199,
    0.8038494831763895, 0.7965423304282546, 0.7893761435711986,
    0.7823418326598619, 0.7754313049861383, 0.7686373158033348,
    0.7619533468415465, 0.7553735065117545, 0.7488924472237267,
    0.7425052963446362, 0.7362075981312667, 0.7299952645658024,
    0.7238645334728816, 0.7178119326349014, 0.7118342488823585,
    0.7059285013367974, 0.7000919181404901, 0.6943219161300326,
    0.6886160830085271, 0.6829721616487914, 0.6773880362225131,
    0.6718617199007664, 0.6663913439123806, 0.6609751477802414,
    0.6556114705832247, 0.6502987431142946, 0.6450354808242519,
    0.639820277456439, 0.63465179929096, 0.6295287799281283,
    0.6244500155502742, 0.6194143606090392, 0.6144207238920768,
    0.6094680649288954, 0.6045553907005495, 0.5996817526221677,
    0.5948462437709913, 0.590047996335792, 0.5852861792663003,
    0.5805599961036835, 0.5758686829752105, 0.571211506738075,
    0.5665877632589518, 0.5619967758172779, 0.5574378936214863,
    0.5529104904285199, 0.5484139632579211, 0.5439477311926499,
    0.5395112342595446, 0.5351039323830196, 0.5307253044061939,
    0.5263748471741867, 0.5220520746747949, 0.5177565172322006,
    0.513487720749743, 0.5092452459981361, 0.5050286679458288,
    0.5008375751284821, 0.4966715690547963, 0.49253026364614866,
    0.48841328470771206, 0.4843202694289116, 0.4802508659112497,
    0.4762047327216838, 0.47218153846988326, 0.46818096140782217,
    0.46420268905027884, 0.4602464178149235, 0.45631185268077357,
    0.4523987068638825, 0.44850670150921407, 0.44463556539772775,
    0.4407850346677699, 0.4369548525499293, 0.43314476911457406,
    0.4293545410313415, 0.4255839313399006, 0.4218327092313533,
    0.4181006498396846, 0.4143875340427068, 0.4106931482719832,
    0.40701728433124795, 0.4033597392228689, 0.39972031498193167,
    0.3960988185175471, 0.39249506146101076, 0.3889088600204646,
    0.38534003484173396, 0.38178841087503135, 0.3782538172472381,
    0.3747360871394914, 0.37123505766982134, 0.3677505697805962,
    0.3642824681305496, 0.36083060099117575, 0.3573948201472905,
    0.35397498080156925, 0.3505709414828812, 0.3471825639582515,
    0.34380971314829134, 0.34045225704594545, 0.3371100666384128,
    0.3337830158321085, 0.3304709813805371, 0.3271738428149586,
    0.323891482377732, 0.32062378495823013, 0.3173706380312224,
    0.31413193159763014, 0.3109075581275637, 0.30769741250555377,
    0.3045013919778963, 0.3013193961020341, 0.29815132669790134,
    0.29499708780116257, 0.291856585618281, 0.28872972848335393,
    0.2856164268166581, 0.2825165930848494, 0.2794301417627653,
    0.27635698929678126, 0.2732970540696758, 0.27025025636696,
    0.26721651834463184, 0.26419576399831757, 0.2611879191337637,
    0.258192911338648, 0.25521066995567715, 0.25224112605694377,
    0.2492842124195167, 0.24633986350223877, 0.243408015423712,
    0.2404886059414491, 0.23758157443217368, 0.2346868618732527,
    0.23180441082524852, 0.22893416541557748, 0.22607607132326488,
    0.2232300757647896, 0.2203961274810116, 0.21757417672517837,
    0.2147641752520085, 0.21196607630785294, 0.20917983462193565,
    0.20640540639867933, 0.2036427493111215, 0.20089182249543133,
    0.1981525865465381, 0.1954250035148856, 0.1927090369043288,
    0.19000465167119307, 0.18731181422451693, 0.18463049242750454,
    0.1819606556002165, 0.1793022745235304, 0.17665532144440665,
    0.17401977008249936, 0.17139559563815562, 0.16878277480185033,
    0.16618128576511007, 0.16359110823298295, 0.16101222343811766,
    0.15844461415652022, 0.15588826472506456, 0.15334316106083767,
    0.15080929068241017, 0.14828664273312872, 0.14577520800653793,
    0.14327497897404712, 0.1407859498149683, 0.13830811644906432,
    0.13584147657175735, 0.13338602969216284, 0.13094177717412817,
    0.12850872228047364, 0.12608687022065035, 0.1236762282020514,
    0.12127680548523544, 0.1188886134433457, 0.11651166562603701,
    0.11414597782825521, 0.11179156816424558, 0.10944845714721002,
    0.10711666777507288, 0.10479622562286706, 0.10248715894230627,
    0.10018949876917202, 0.09790327903921563, 0.09562853671335333,
    0.09336531191302662, 0.09111364806670073, 0.08887359206859423,
    0.08664519445086778, 0.08442850957065466, 0.08222359581349568,
    0.08003051581494751, 0.07784933670237221, 0.07568013035919496,
    0.07352297371424099, 0.07137794905914197, 0.06924514439725027,
    0.06712465382802399, 0.06501657797147044, 0.06292102443797785,
    0.060838108349751806, 0.058767952921137984, 0.05671069010639947,
    0.054666461325077916, 0.05263541827697365, 0.05061772386112179,
    0.048613553216035145, 0.046623094902089664, 0.044646552251446536,
    0.04268414491661938, 0.04073611065607875, 0.03880270740465692,
    0.03688421568869115, 0.03498094146183307, 0.0330932194586887,
    0.03122141719202369, 0.02936593975823011, 0.027527235669693315,
    0.025705804008632656, 0.023902203305873237, 0.022117062707379922,
    0.020351096230109354, 0.01860512127578335, 0.01688008315259584,
    0.015177088307982072, 0.013497450601780807, 0.011842757857943104,
    0.0102149714397311, 0.008616582769422917, 0.00705087547139211,
    0.005522403299264754, 0.0040379725933718715, 0.002609072746106363,
    0.001260285930498598,
];
