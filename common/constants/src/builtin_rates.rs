// Per-second rates in RAY for annual percentages 0%..=100% in 0.1% steps.
// Each entry is ln(1 + p) / SECONDS_PER_YEAR rounded to six significant digits.

pub const BUILTIN_RATES_PER_SECOND: [u128; 1001] = [
    0, 31693900000000000, 63356200000000000, 94987000000000000,
    126586000000000000, 158154000000000000, 189690000000000000, 221195000000000000,
    252669000000000000, 284112000000000000, 315523000000000000, 346903000000000000,
    378253000000000000, 409571000000000000, 440858000000000000, 472115000000000000,
    503341000000000000, 534536000000000000, 565700000000000000, 596834000000000000,
    627937000000000000, 659010000000000000, 690052000000000000, 721064000000000000,
    752046000000000000, 782998000000000000, 813919000000000000, 844810000000000000,
    875671000000000000, 906502000000000000, 937303000000000000, 968075000000000000,
    998816000000000000, 1029530000000000000, 1060210000000000000, 1090860000000000000,
    1121480000000000000, 1152080000000000000, 1182640000000000000, 1213180000000000000,
    1243680000000000000, 1274160000000000000, 1304600000000000000, 1335020000000000000,
    1365410000000000000, 1395770000000000000, 1426100000000000000, 1456400000000000000,
    1486670000000000000, 1516910000000000000, 1547130000000000000, 1577310000000000000,
    1607470000000000000, 1637600000000000000, 1667700000000000000, 1697770000000000000,
    1727810000000000000, 1757820000000000000, 1787810000000000000, 1817770000000000000,
    1847690000000000000, 1877600000000000000, 1907470000000000000, 1937310000000000000,
    1967130000000000000, 1996920000000000000, 2026680000000000000, 2056410000000000000,
    2086120000000000000, 2115790000000000000, 2145440000000000000, 2175060000000000000,
    2204660000000000000, 2234220000000000000, 2263760000000000000, 2293270000000000000,
    2322760000000000000, 2352210000000000000, 2381640000000000000, 2411040000000000000,
    2440420000000000000, 2469770000000000000, 2499090000000000000, 2528380000000000000,
    2557650000000000000, 2586880000000000000, 2616100000000000000, 2645280000000000000,
    2674440000000000000, 2703570000000000000, 2732680000000000000, 2761760000000000000,
    2790810000000000000, 2819830000000000000, 2848830000000000000, 2877800000000000000,
    2906750000000000000, 2935670000000000000, 2964560000000000000, 2993430000000000000,
    3022270000000000000, 3051080000000000000, 3079870000000000000, 3108630000000000000,
    3137370000000000000, 3166070000000000000, 3194760000000000000, 3223420000000000000,
    3252050000000000000, 3280650000000000000, 3309230000000000000, 3337790000000000000,
    3366320000000000000, 3394820000000000000, 3423300000000000000, 3451750000000000000,
    3480180000000000000, 3508580000000000000, 3536950000000000000, 3565300000000000000,
    3593630000000000000, 3621930000000000000, 3650200000000000000, 3678450000000000000,
    3706680000000000000, 3734880000000000000, 3763050000000000000, 3791200000000000000,
    3819320000000000000, 3847420000000000000, 3875500000000000000, 3903550000000000000,
    3931570000000000000, 3959570000000000000, 3987540000000000000, 4015500000000000000,
    4043420000000000000, 4071320000000000000, 4099200000000000000, 4127050000000000000,
    4154880000000000000, 4182680000000000000, 4210460000000000000, 4238220000000000000,
    4265950000000000000, 4293650000000000000, 4321330000000000000, 4348990000000000000,
    4376630000000000000, 4404240000000000000, 4431820000000000000, 4459380000000000000,
    4486920000000000000, 4514440000000000000, 4541930000000000000, 4569390000000000000,
    4596830000000000000, 4624250000000000000, 4651650000000000000, 4679020000000000000,
    4706370000000000000, 4733690000000000000, 4760990000000000000, 4788270000000000000,
    4815520000000000000, 4842750000000000000, 4869960000000000000, 4897140000000000000,
    4924310000000000000, 4951440000000000000, 4978560000000000000, 5005650000000000000,
    5032710000000000000, 5059760000000000000, 5086780000000000000, 5113780000000000000,
    5140750000000000000, 5167710000000000000, 5194640000000000000, 5221540000000000000,
    5248430000000000000, 5275290000000000000, 5302130000000000000, 5328940000000000000,
    5355740000000000000, 5382510000000000000, 5409260000000000000, 5435980000000000000,
    5462680000000000000, 5489370000000000000, 5516020000000000000, 5542660000000000000,
    5569270000000000000, 5595860000000000000, 5622430000000000000, 5648980000000000000,
    5675500000000000000, 5702000000000000000, 5728480000000000000, 5754940000000000000,
    5781380000000000000, 5807790000000000000, 5834180000000000000, 5860550000000000000,
    5886900000000000000, 5913230000000000000, 5939530000000000000, 5965820000000000000,
    5992080000000000000, 6018310000000000000, 6044530000000000000, 6070730000000000000,
    6096900000000000000, 6123050000000000000, 6149180000000000000, 6175290000000000000,
    6201380000000000000, 6227450000000000000, 6253490000000000000, 6279520000000000000,
    6305520000000000000, 6331500000000000000, 6357460000000000000, 6383400000000000000,
    6409320000000000000, 6435210000000000000, 6461090000000000000, 6486940000000000000,
    6512770000000000000, 6538590000000000000, 6564380000000000000, 6590150000000000000,
    6615900000000000000, 6641620000000000000, 6667330000000000000, 6693020000000000000,
    6718680000000000000, 6744330000000000000, 6769950000000000000, 6795550000000000000,
    6821140000000000000, 6846700000000000000, 6872240000000000000, 6897760000000000000,
    6923260000000000000, 6948740000000000000, 6974200000000000000, 6999640000000000000,
    7025060000000000000, 7050460000000000000, 7075840000000000000, 7101190000000000000,
    7126530000000000000, 7151850000000000000, 7177140000000000000, 7202420000000000000,
    7227680000000000000, 7252920000000000000, 7278130000000000000, 7303330000000000000,
    7328500000000000000, 7353660000000000000, 7378800000000000000, 7403910000000000000,
    7429010000000000000, 7454090000000000000, 7479150000000000000, 7504180000000000000,
    7529200000000000000, 7554200000000000000, 7579180000000000000, 7604130000000000000,
    7629070000000000000, 7653990000000000000, 7678890000000000000, 7703770000000000000,
    7728630000000000000, 7753470000000000000, 7778300000000000000, 7803100000000000000,
    7827880000000000000, 7852650000000000000, 7877390000000000000, 7902110000000000000,
    7926820000000000000, 7951510000000000000, 7976170000000000000, 8000820000000000000,
    8025450000000000000, 8050060000000000000, 8074650000000000000, 8099220000000000000,
    8123780000000000000, 8148310000000000000, 8172820000000000000, 8197320000000000000,
    8221800000000000000, 8246260000000000000, 8270690000000000000, 8295110000000000000,
    8319520000000000000, 8343900000000000000, 8368260000000000000, 8392610000000000000,
    8416940000000000000, 8441240000000000000, 8465530000000000000, 8489800000000000000,
    8514060000000000000, 8538290000000000000, 8562500000000000000, 8586700000000000000,
    8610880000000000000, 8635040000000000000, 8659180000000000000, 8683300000000000000,
    8707410000000000000, 8731490000000000000, 8755560000000000000, 8779610000000000000,
    8803640000000000000, 8827660000000000000, 8851650000000000000, 8875630000000000000,
    8899590000000000000, 8923530000000000000, 8947450000000000000, 8971360000000000000,
    8995250000000000000, 9019110000000000000, 9042960000000000000, 9066800000000000000,
    9090610000000000000, 9114410000000000000, 9138190000000000000, 9161950000000000000,
    9185690000000000000, 9209420000000000000, 9233130000000000000, 9256820000000000000,
    9280490000000000000, 9304150000000000000, 9327790000000000000, 9351410000000000000,
    9375010000000000000, 9398590000000000000, 9422160000000000000, 9445710000000000000,
    9469240000000000000, 9492760000000000000, 9516250000000000000, 9539730000000000000,
    9563200000000000000, 9586640000000000000, 9610070000000000000, 9633480000000000000,
    9656870000000000000, 9680250000000000000, 9703610000000000000, 9726950000000000000,
    9750280000000000000, 9773580000000000000, 9796870000000000000, 9820150000000000000,
    9843400000000000000, 9866640000000000000, 9889860000000000000, 9913070000000000000,
    9936260000000000000, 9959430000000000000, 9982580000000000000, 10005700000000000000,
    10028800000000000000, 10051900000000000000, 10075000000000000000, 10098100000000000000,
    10121200000000000000, 10144200000000000000, 10167200000000000000, 10190200000000000000,
    10213200000000000000, 10236200000000000000, 10259100000000000000, 10282100000000000000,
    10305000000000000000, 10327900000000000000, 10350800000000000000, 10373600000000000000,
    10396500000000000000, 10419300000000000000, 10442200000000000000, 10465000000000000000,
    10487700000000000000, 10510500000000000000, 10533300000000000000, 10556000000000000000,
    10578700000000000000, 10601400000000000000, 10624100000000000000, 10646800000000000000,
    10669500000000000000, 10692100000000000000, 10714700000000000000, 10737300000000000000,
    10759900000000000000, 10782500000000000000, 10805100000000000000, 10827600000000000000,
    10850100000000000000, 10872700000000000000, 10895200000000000000, 10917600000000000000,
    10940100000000000000, 10962600000000000000, 10985000000000000000, 11007400000000000000,
    11029800000000000000, 11052200000000000000, 11074600000000000000, 11096900000000000000,
    11119300000000000000, 11141600000000000000, 11163900000000000000, 11186200000000000000,
    11208500000000000000, 11230700000000000000, 11253000000000000000, 11275200000000000000,
    11297400000000000000, 11319600000000000000, 11341800000000000000, 11363900000000000000,
    11386100000000000000, 11408200000000000000, 11430400000000000000, 11452500000000000000,
    11474600000000000000, 11496600000000000000, 11518700000000000000, 11540700000000000000,
    11562800000000000000, 11584800000000000000, 11606800000000000000, 11628800000000000000,
    11650700000000000000, 11672700000000000000, 11694600000000000000, 11716500000000000000,
    11738400000000000000, 11760300000000000000, 11782200000000000000, 11804100000000000000,
    11825900000000000000, 11847700000000000000, 11869600000000000000, 11891400000000000000,
    11913100000000000000, 11934900000000000000, 11956700000000000000, 11978400000000000000,
    12000100000000000000, 12021900000000000000, 12043500000000000000, 12065200000000000000,
    12086900000000000000, 12108600000000000000, 12130200000000000000, 12151800000000000000,
    12173400000000000000, 12195000000000000000, 12216600000000000000, 12238200000000000000,
    12259700000000000000, 12281200000000000000, 12302800000000000000, 12324300000000000000,
    12345800000000000000, 12367200000000000000, 12388700000000000000, 12410100000000000000,
    12431600000000000000, 12453000000000000000, 12474400000000000000, 12495800000000000000,
    12517200000000000000, 12538500000000000000, 12559900000000000000, 12581200000000000000,
    12602500000000000000, 12623800000000000000, 12645100000000000000, 12666400000000000000,
    12687600000000000000, 12708900000000000000, 12730100000000000000, 12751300000000000000,
    12772500000000000000, 12793700000000000000, 12814900000000000000, 12836100000000000000,
    12857200000000000000, 12878300000000000000, 12899500000000000000, 12920600000000000000,
    12941700000000000000, 12962700000000000000, 12983800000000000000, 13004800000000000000,
    13025900000000000000, 13046900000000000000, 13067900000000000000, 13088900000000000000,
    13109900000000000000, 13130800000000000000, 13151800000000000000, 13172700000000000000,
    13193700000000000000, 13214600000000000000, 13235500000000000000, 13256300000000000000,
    13277200000000000000, 13298100000000000000, 13318900000000000000, 13339700000000000000,
    13360600000000000000, 13381400000000000000, 13402100000000000000, 13422900000000000000,
    13443700000000000000, 13464400000000000000, 13485200000000000000, 13505900000000000000,
    13526600000000000000, 13547300000000000000, 13567900000000000000, 13588600000000000000,
    13609300000000000000, 13629900000000000000, 13650500000000000000, 13671100000000000000,
    13691700000000000000, 13712300000000000000, 13732900000000000000, 13753400000000000000,
    13774000000000000000, 13794500000000000000, 13815000000000000000, 13835500000000000000,
    13856000000000000000, 13876500000000000000, 13897000000000000000, 13917400000000000000,
    13937900000000000000, 13958300000000000000, 13978700000000000000, 13999100000000000000,
    14019500000000000000, 14039900000000000000, 14060200000000000000, 14080600000000000000,
    14100900000000000000, 14121200000000000000, 14141500000000000000, 14161800000000000000,
    14182100000000000000, 14202400000000000000, 14222600000000000000, 14242900000000000000,
    14263100000000000000, 14283300000000000000, 14303500000000000000, 14323700000000000000,
    14343900000000000000, 14364000000000000000, 14384200000000000000, 14404300000000000000,
    14424500000000000000, 14444600000000000000, 14464700000000000000, 14484800000000000000,
    14504800000000000000, 14524900000000000000, 14545000000000000000, 14565000000000000000,
    14585000000000000000, 14605000000000000000, 14625000000000000000, 14645000000000000000,
    14665000000000000000, 14685000000000000000, 14704900000000000000, 14724800000000000000,
    14744800000000000000, 14764700000000000000, 14784600000000000000, 14804500000000000000,
    14824300000000000000, 14844200000000000000, 14864100000000000000, 14883900000000000000,
    14903700000000000000, 14923500000000000000, 14943300000000000000, 14963100000000000000,
    14982900000000000000, 15002700000000000000, 15022400000000000000, 15042100000000000000,
    15061900000000000000, 15081600000000000000, 15101300000000000000, 15121000000000000000,
    15140700000000000000, 15160300000000000000, 15180000000000000000, 15199600000000000000,
    15219200000000000000, 15238900000000000000, 15258500000000000000, 15278100000000000000,
    15297600000000000000, 15317200000000000000, 15336800000000000000, 15356300000000000000,
    15375800000000000000, 15395400000000000000, 15414900000000000000, 15434400000000000000,
    15453800000000000000, 15473300000000000000, 15492800000000000000, 15512200000000000000,
    15531700000000000000, 15551100000000000000, 15570500000000000000, 15589900000000000000,
    15609300000000000000, 15628700000000000000, 15648000000000000000, 15667400000000000000,
    15686700000000000000, 15706000000000000000, 15725400000000000000, 15744700000000000000,
    15764000000000000000, 15783200000000000000, 15802500000000000000, 15821800000000000000,
    15841000000000000000, 15860300000000000000, 15879500000000000000, 15898700000000000000,
    15917900000000000000, 15937100000000000000, 15956300000000000000, 15975400000000000000,
    15994600000000000000, 16013700000000000000, 16032900000000000000, 16052000000000000000,
    16071100000000000000, 16090200000000000000, 16109300000000000000, 16128300000000000000,
    16147400000000000000, 16166400000000000000, 16185500000000000000, 16204500000000000000,
    16223500000000000000, 16242500000000000000, 16261500000000000000, 16280500000000000000,
    16299500000000000000, 16318400000000000000, 16337400000000000000, 16356300000000000000,
    16375300000000000000, 16394200000000000000, 16413100000000000000, 16432000000000000000,
    16450800000000000000, 16469700000000000000, 16488600000000000000, 16507400000000000000,
    16526300000000000000, 16545100000000000000, 16563900000000000000, 16582700000000000000,
    16601500000000000000, 16620300000000000000, 16639000000000000000, 16657800000000000000,
    16676500000000000000, 16695300000000000000, 16714000000000000000, 16732700000000000000,
    16751400000000000000, 16770100000000000000, 16788800000000000000, 16807500000000000000,
    16826100000000000000, 16844800000000000000, 16863400000000000000, 16882000000000000000,
    16900600000000000000, 16919200000000000000, 16937800000000000000, 16956400000000000000,
    16975000000000000000, 16993500000000000000, 17012100000000000000, 17030600000000000000,
    17049200000000000000, 17067700000000000000, 17086200000000000000, 17104700000000000000,
    17123200000000000000, 17141600000000000000, 17160100000000000000, 17178500000000000000,
    17197000000000000000, 17215400000000000000, 17233800000000000000, 17252300000000000000,
    17270600000000000000, 17289000000000000000, 17307400000000000000, 17325800000000000000,
    17344100000000000000, 17362500000000000000, 17380800000000000000, 17399100000000000000,
    17417500000000000000, 17435800000000000000, 17454000000000000000, 17472300000000000000,
    17490600000000000000, 17508900000000000000, 17527100000000000000, 17545400000000000000,
    17563600000000000000, 17581800000000000000, 17600000000000000000, 17618200000000000000,
    17636400000000000000, 17654600000000000000, 17672700000000000000, 17690900000000000000,
    17709000000000000000, 17727200000000000000, 17745300000000000000, 17763400000000000000,
    17781500000000000000, 17799600000000000000, 17817700000000000000, 17835800000000000000,
    17853800000000000000, 17871900000000000000, 17889900000000000000, 17908000000000000000,
    17926000000000000000, 17944000000000000000, 17962000000000000000, 17980000000000000000,
    17998000000000000000, 18015900000000000000, 18033900000000000000, 18051900000000000000,
    18069800000000000000, 18087700000000000000, 18105600000000000000, 18123600000000000000,
    18141500000000000000, 18159300000000000000, 18177200000000000000, 18195100000000000000,
    18213000000000000000, 18230800000000000000, 18248600000000000000, 18266500000000000000,
    18284300000000000000, 18302100000000000000, 18319900000000000000, 18337700000000000000,
    18355500000000000000, 18373200000000000000, 18391000000000000000, 18408700000000000000,
    18426500000000000000, 18444200000000000000, 18461900000000000000, 18479600000000000000,
    18497300000000000000, 18515000000000000000, 18532700000000000000, 18550400000000000000,
    18568000000000000000, 18585700000000000000, 18603300000000000000, 18621000000000000000,
    18638600000000000000, 18656200000000000000, 18673800000000000000, 18691400000000000000,
    18709000000000000000, 18726600000000000000, 18744100000000000000, 18761700000000000000,
    18779200000000000000, 18796700000000000000, 18814300000000000000, 18831800000000000000,
    18849300000000000000, 18866800000000000000, 18884300000000000000, 18901700000000000000,
    18919200000000000000, 18936700000000000000, 18954100000000000000, 18971600000000000000,
    18989000000000000000, 19006400000000000000, 19023800000000000000, 19041200000000000000,
    19058600000000000000, 19076000000000000000, 19093300000000000000, 19110700000000000000,
    19128100000000000000, 19145400000000000000, 19162700000000000000, 19180100000000000000,
    19197400000000000000, 19214700000000000000, 19232000000000000000, 19249300000000000000,
    19266500000000000000, 19283800000000000000, 19301100000000000000, 19318300000000000000,
    19335500000000000000, 19352800000000000000, 19370000000000000000, 19387200000000000000,
    19404400000000000000, 19421600000000000000, 19438800000000000000, 19455900000000000000,
    19473100000000000000, 19490300000000000000, 19507400000000000000, 19524500000000000000,
    19541700000000000000, 19558800000000000000, 19575900000000000000, 19593000000000000000,
    19610100000000000000, 19627200000000000000, 19644200000000000000, 19661300000000000000,
    19678400000000000000, 19695400000000000000, 19712400000000000000, 19729500000000000000,
    19746500000000000000, 19763500000000000000, 19780500000000000000, 19797500000000000000,
    19814400000000000000, 19831400000000000000, 19848400000000000000, 19865300000000000000,
    19882300000000000000, 19899200000000000000, 19916100000000000000, 19933000000000000000,
    19950000000000000000, 19966900000000000000, 19983700000000000000, 20000600000000000000,
    20017500000000000000, 20034400000000000000, 20051200000000000000, 20068100000000000000,
    20084900000000000000, 20101700000000000000, 20118500000000000000, 20135300000000000000,
    20152100000000000000, 20168900000000000000, 20185700000000000000, 20202500000000000000,
    20219300000000000000, 20236000000000000000, 20252800000000000000, 20269500000000000000,
    20286200000000000000, 20302900000000000000, 20319700000000000000, 20336400000000000000,
    20353100000000000000, 20369700000000000000, 20386400000000000000, 20403100000000000000,
    20419700000000000000, 20436400000000000000, 20453000000000000000, 20469700000000000000,
    20486300000000000000, 20502900000000000000, 20519500000000000000, 20536100000000000000,
    20552700000000000000, 20569300000000000000, 20585800000000000000, 20602400000000000000,
    20619000000000000000, 20635500000000000000, 20652000000000000000, 20668600000000000000,
    20685100000000000000, 20701600000000000000, 20718100000000000000, 20734600000000000000,
    20751100000000000000, 20767600000000000000, 20784000000000000000, 20800500000000000000,
    20816900000000000000, 20833400000000000000, 20849800000000000000, 20866200000000000000,
    20882700000000000000, 20899100000000000000, 20915500000000000000, 20931900000000000000,
    20948200000000000000, 20964600000000000000, 20981000000000000000, 20997300000000000000,
    21013700000000000000, 21030000000000000000, 21046400000000000000, 21062700000000000000,
    21079000000000000000, 21095300000000000000, 21111600000000000000, 21127900000000000000,
    21144200000000000000, 21160500000000000000, 21176700000000000000, 21193000000000000000,
    21209200000000000000, 21225500000000000000, 21241700000000000000, 21257900000000000000,
    21274100000000000000, 21290400000000000000, 21306600000000000000, 21322700000000000000,
    21338900000000000000, 21355100000000000000, 21371300000000000000, 21387400000000000000,
    21403600000000000000, 21419700000000000000, 21435900000000000000, 21452000000000000000,
    21468100000000000000, 21484200000000000000, 21500300000000000000, 21516400000000000000,
    21532500000000000000, 21548600000000000000, 21564600000000000000, 21580700000000000000,
    21596700000000000000, 21612800000000000000, 21628800000000000000, 21644800000000000000,
    21660900000000000000, 21676900000000000000, 21692900000000000000, 21708900000000000000,
    21724900000000000000, 21740800000000000000, 21756800000000000000, 21772800000000000000,
    21788700000000000000, 21804700000000000000, 21820600000000000000, 21836500000000000000,
    21852500000000000000, 21868400000000000000, 21884300000000000000, 21900200000000000000,
    21916100000000000000, 21932000000000000000, 21947800000000000000, 21963700000000000000,
    21979600000000000000,
];
